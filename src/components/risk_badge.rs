use yew::prelude::*;

use crate::predict::{PredictionRecord, RiskLevel};

#[derive(Properties, PartialEq, Clone)]
pub struct RiskBadgeProps {
    pub record: Option<PredictionRecord>,
    pub offline: bool,
    pub on_click: Callback<()>,
}

fn risk_background(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "rgba(46,160,67,0.9)",
        RiskLevel::Medium => "rgba(240,136,62,0.9)",
        RiskLevel::High => "rgba(248,81,73,0.9)",
    }
}

/// Screen-fixed risk badge driven by the latest prediction record. The
/// offline style takes precedence so a degraded feed stays visible even
/// while fallback records keep arriving.
#[function_component(RiskBadge)]
pub fn risk_badge(props: &RiskBadgeProps) -> Html {
    let onclick = {
        let cb = props.on_click.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    if props.offline {
        return html! {
            <div style="position:absolute; top:12px; right:12px; z-index:50; background:rgba(248,81,73,0.9); color:#fff; padding:6px 10px; border-radius:6px; border:1px solid #f85149; font-size:13px; font-weight:600;">
                {"Predictive Engine Offline"}
            </div>
        };
    }

    match &props.record {
        Some(record) => html! {
            <div {onclick}
                style={format!("position:absolute; top:12px; right:12px; z-index:50; background:{}; color:#fff; padding:6px 10px; border-radius:6px; border:1px solid #30363d; font-size:13px; font-weight:600; cursor:pointer;", risk_background(record.risk_level))}>
                { format!("Risk: {} (score: {:.2})", record.risk_level.label(), record.risk_score) }
                <span style="margin-left:8px; font-size:11px; opacity:0.7;">{"Details"}</span>
            </div>
        },
        None => html! {},
    }
}
