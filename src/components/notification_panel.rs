use yew::prelude::*;

use super::app::NotificationContext;
use crate::model::Severity;

#[derive(Properties, PartialEq, Clone)]
pub struct NotificationPanelProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "#f85149",
        Severity::Medium => "#f0883e",
        Severity::Low => "#58a6ff",
    }
}

#[function_component(NotificationPanel)]
pub fn notification_panel(props: &NotificationPanelProps) -> Html {
    let ctx = use_context::<NotificationContext>().expect("notification context");
    if !props.is_open {
        return html! {};
    }

    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let clear_all = {
        let cb = ctx.clear_all.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let entries = if ctx.state.items.is_empty() {
        html! { <div style="padding:18px; text-align:center; opacity:0.6;">{"No notifications"}</div> }
    } else {
        ctx.state
            .items
            .iter()
            .map(|n| {
                let mark = {
                    let cb = ctx.mark_read.clone();
                    let id = n.id;
                    Callback::from(move |_: MouseEvent| cb.emit(id))
                };
                let background = if n.read { "transparent" } else { "rgba(88,166,255,0.08)" };
                html! {
                    <li key={n.id.to_string()} onclick={mark}
                        style={format!("padding:10px 12px; border-bottom:1px solid #21262d; cursor:pointer; background:{};", background)}>
                        <div style="display:flex; align-items:center; gap:8px;">
                            <span style={format!("display:inline-block; width:10px; height:10px; border-radius:50%; background:{};", severity_color(n.severity))}></span>
                            <span style="font-weight:600; flex:1;">{ &n.title }</span>
                            <span style="font-size:11px; opacity:0.6;">{ &n.timestamp }</span>
                        </div>
                        <div style="font-size:12px; opacity:0.8; margin-top:4px;">{ &n.message }</div>
                        <div style="font-size:11px; opacity:0.6; margin-top:4px; display:flex; gap:12px;">
                            { for n.threat_type.as_ref().map(|t| html!{ <span>{ format!("Type: {}", t) }</span> }) }
                            { for n.sector.as_ref().map(|s| html!{ <span>{ format!("Sector: {}", s) }</span> }) }
                            { for n.coordinates.as_ref().map(|c| html!{ <span>{ format!("Coordinates: {}", c) }</span> }) }
                        </div>
                    </li>
                }
            })
            .collect::<Html>()
    };

    let unread = ctx.state.unread_count();
    html! {
        <div style="position:absolute; top:48px; right:12px; z-index:60; width:380px; background:rgba(22,27,34,0.97); border:1px solid #30363d; border-radius:8px; overflow:hidden;">
            <div style="display:flex; align-items:center; justify-content:space-between; padding:10px 12px; border-bottom:1px solid #30363d;">
                <span style="font-weight:700;">
                    { "Notifications" }
                    { if unread > 0 { html!{ <span style="margin-left:8px; font-size:11px; color:#00ff73;">{ unread }</span> } } else { html!{} } }
                </span>
                <div style="display:flex; gap:8px;">
                    <button onclick={clear_all}>{"Clear All"}</button>
                    <button onclick={close}>{"Close"}</button>
                </div>
            </div>
            <ul style="list-style:none; margin:0; padding:0; max-height:380px; overflow-y:auto;">
                { entries }
            </ul>
        </div>
    }
}
