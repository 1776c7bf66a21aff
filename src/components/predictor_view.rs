use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::predict::{classify_risk, local_risk_score, RiskLevel};

fn risk_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "#2ea043",
        RiskLevel::Medium => "#f0883e",
        RiskLevel::High => "#f85149",
    }
}

fn risk_advisory(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "Conditions nominal. Maintain standard patrol rotation.",
        RiskLevel::Medium => "Elevated conditions. Increase surveillance coverage and brief response teams.",
        RiskLevel::High => "Critical conditions. Deploy rapid response assets and restrict sector access.",
    }
}

/// Standalone what-if calculator over the same formula the fallback engine
/// uses. Everything recomputes synchronously on slider input; nothing here
/// touches the network or the feed.
#[function_component(PredictorView)]
pub fn predictor_view() -> Html {
    let lat = use_state(|| 28.61_f64);
    let lon = use_state(|| 77.20_f64);
    let wind_speed = use_state(|| 10.0_f64);
    let temperature = use_state(|| 25.0_f64);
    let threat_count = use_state(|| 2_u32);

    let on_lat = {
        let lat = lat.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            lat.set(input.value().parse().unwrap_or(0.0));
        })
    };
    let on_lon = {
        let lon = lon.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            lon.set(input.value().parse().unwrap_or(0.0));
        })
    };
    let on_wind = {
        let wind_speed = wind_speed.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            wind_speed.set(input.value().parse().unwrap_or(0.0));
        })
    };
    let on_temp = {
        let temperature = temperature.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            temperature.set(input.value().parse().unwrap_or(0.0));
        })
    };
    let on_threats = {
        let threat_count = threat_count.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            threat_count.set(input.value().parse().unwrap_or(0));
        })
    };

    let score = local_risk_score(*wind_speed, *temperature, *threat_count);
    let level = classify_risk(score);

    // Range attributes must be 'static: html! attribute props outlive the
    // closure's borrow.
    let slider_row = |label: String,
                      min: &'static str,
                      max: &'static str,
                      step: &'static str,
                      value: String,
                      oninput: Callback<InputEvent>| {
        html! {
            <div style="margin-bottom:18px;">
                <div style="display:flex; justify-content:space-between; font-size:13px; margin-bottom:4px;">
                    <span>{ label }</span>
                </div>
                <input type="range" {min} {max} {step} {value} {oninput} style="width:100%;" />
            </div>
        }
    };

    html! {
        <div style="height:100%; display:flex; align-items:center; justify-content:center; padding:20px;">
            <div style="width:480px; max-width:95%; background:#161b22; border:1px solid #30363d; border-radius:8px; padding:24px;">
                <h2 style="margin:0 0 4px 0; color:#00ff73;">{"RISK PREDICTOR"}</h2>
                <p style="margin:0 0 20px 0; font-size:12px; opacity:0.7;">
                    {"Adjust environmental factors to model sector risk."}
                </p>
                <div style="display:flex; gap:12px; margin-bottom:18px;">
                    <label style="flex:1; font-size:13px;">
                        {"Latitude"}
                        <input type="number" step="0.01" value={lat.to_string()} oninput={on_lat}
                            style="width:100%; box-sizing:border-box; margin-top:4px; background:#0e1116; color:#c9d1d9; border:1px solid #30363d; border-radius:4px; padding:4px 6px; font-family:monospace;" />
                    </label>
                    <label style="flex:1; font-size:13px;">
                        {"Longitude"}
                        <input type="number" step="0.01" value={lon.to_string()} oninput={on_lon}
                            style="width:100%; box-sizing:border-box; margin-top:4px; background:#0e1116; color:#c9d1d9; border:1px solid #30363d; border-radius:4px; padding:4px 6px; font-family:monospace;" />
                    </label>
                </div>
                { slider_row(format!("Wind speed: {} km/h", *wind_speed), "0", "100", "1", wind_speed.to_string(), on_wind) }
                { slider_row(format!("Temperature: {}\u{b0}C", *temperature), "-10", "40", "1", temperature.to_string(), on_temp) }
                { slider_row(format!("Previous threats: {}", *threat_count), "0", "10", "1", threat_count.to_string(), on_threats) }
                <div style={format!("margin-top:8px; padding:16px; border-radius:6px; text-align:center; border:1px solid {}; background:rgba(0,0,0,0.3);", risk_color(level))}>
                    <div style={format!("font-size:28px; font-weight:700; color:{};", risk_color(level))}>
                        { format!("{:.2}", score) }
                    </div>
                    <div style={format!("font-size:14px; font-weight:600; margin-top:4px; color:{};", risk_color(level))}>
                        { format!("{} RISK", level.label()) }
                    </div>
                    <div style="font-size:12px; opacity:0.8; margin-top:8px;">
                        { risk_advisory(level) }
                    </div>
                </div>
            </div>
        </div>
    }
}
