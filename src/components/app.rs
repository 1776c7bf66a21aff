use yew::prelude::*;

use super::{
    command_view::CommandView, notification_panel::NotificationPanel,
    predictor_view::PredictorView,
};
use crate::model::{NotificationDraft, NotificationState, NotifyAction};
use crate::util::clock_time;

#[derive(PartialEq, Clone)]
enum View {
    Command,
    Predictor,
}

/// Shared notification feed (so any view can publish or consume alerts
/// without prop drilling).
#[derive(Clone, PartialEq)]
pub struct NotificationContext {
    pub state: NotificationState,
    pub push: Callback<NotificationDraft>,
    pub mark_read: Callback<u64>,
    pub clear_all: Callback<()>,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Command);
    let notifications = use_reducer(NotificationState::default);
    let panel_open = use_state(|| false);

    let push = {
        let notifications = notifications.clone();
        Callback::from(move |draft: NotificationDraft| {
            notifications.dispatch(NotifyAction::Push {
                draft,
                timestamp: clock_time(),
            });
        })
    };
    let mark_read = {
        let notifications = notifications.clone();
        Callback::from(move |id: u64| notifications.dispatch(NotifyAction::MarkRead { id }))
    };
    let clear_all = {
        let notifications = notifications.clone();
        Callback::from(move |_| notifications.dispatch(NotifyAction::ClearAll))
    };

    let ctx = NotificationContext {
        state: (*notifications).clone(),
        push,
        mark_read,
        clear_all,
    };

    let to_command = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(View::Command))
    };
    let to_predictor = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(View::Predictor))
    };
    let toggle_panel = {
        let panel_open = panel_open.clone();
        Callback::from(move |_: MouseEvent| panel_open.set(!*panel_open))
    };
    let close_panel = {
        let panel_open = panel_open.clone();
        Callback::from(move |_| panel_open.set(false))
    };

    let unread = notifications.unread_count();
    let bell_label = if unread > 0 {
        format!("Alerts ({})", unread)
    } else {
        "Alerts".to_string()
    };

    let content = match *view {
        View::Command => html! { <CommandView /> },
        View::Predictor => html! { <PredictorView /> },
    };

    html! {
        <ContextProvider<NotificationContext> context={ctx}>
            <div id="root" style="width:100vw; height:100vh; display:flex; flex-direction:column; background:#0e1116; color:#c9d1d9; font-family:monospace;">
                <div id="top-bar" style="display:flex; align-items:center; justify-content:space-between; padding:10px 16px; background:#161b22; border-bottom:1px solid #30363d;">
                    <span style="font-weight:700; letter-spacing:2px; color:#00ff73;">{"SENTINEL COMMAND"}</span>
                    <div style="display:flex; gap:8px;">
                        <button onclick={to_command}>{"Tactical"}</button>
                        <button onclick={to_predictor}>{"Risk Predictor"}</button>
                        <button onclick={toggle_panel}>{ bell_label }</button>
                    </div>
                </div>
                <NotificationPanel is_open={*panel_open} on_close={close_panel} />
                <div style="flex:1; position:relative; overflow:hidden;">
                    { content }
                </div>
            </div>
        </ContextProvider<NotificationContext>>
    }
}
