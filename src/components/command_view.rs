use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::app::NotificationContext;
use super::risk_badge::RiskBadge;
use crate::catalog;
use crate::geo::{GeoPoint, LAT_ORIGIN, LAT_SPAN, LON_ORIGIN, LON_SPAN};
use crate::model::{EntityKind, HeatKind};
use crate::notify;
use crate::predict::{self, PredictionRequest};
use crate::render::{self, FrameLoop, IntervalTask, TimeoutTask};
use crate::state::{GestureController, SurfaceId, Viewport};
use crate::util::{clog, iso_timestamp};

/// Logical drawing size of both surfaces; on-screen scaling is CSS's job.
const CANVAS_WIDTH: u32 = 400;
const CANVAS_HEIGHT: u32 = 300;

const SIM_THREAT_INTERVAL_MS: i32 = 15_000;
const CATALOG_ALERT_DELAY_MS: i32 = 2_000;
/// Period of the threat ring pulse, in milliseconds.
const PULSE_PERIOD_MS: f64 = 1_500.0;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn random_window_position() -> GeoPoint {
    GeoPoint::new(
        LAT_ORIGIN + js_sys::Math::random() * LAT_SPAN,
        LON_ORIGIN + js_sys::Math::random() * LON_SPAN,
    )
}

fn random_sector() -> String {
    notify::sector_code(js_sys::Math::random(), js_sys::Math::random())
}

#[function_component(CommandView)]
pub fn command_view() -> Html {
    let notif_ctx = use_context::<NotificationContext>().expect("notification context");

    let tactical_canvas = use_node_ref();
    let heat_canvas = use_node_ref();
    let tactical_view = use_mut_ref(Viewport::default);
    let heat_view = use_mut_ref(Viewport::default);
    let gesture = use_mut_ref(GestureController::default);

    let selected_heat = use_state(|| HeatKind::Activity);
    // Mirror of selected_heat readable from the draw closure without
    // re-subscribing the render loop on every toggle.
    let selected_heat_flag = use_mut_ref(|| HeatKind::Activity);

    let prediction = use_state(|| None::<predict::PredictionRecord>);
    let offline = use_state(|| false);
    let loading = use_state(|| false);
    let show_details = use_state(|| false);

    // Effect: propagate the heat-kind toggle to the draw closure.
    {
        let flag = *selected_heat;
        let flag_ref = selected_heat_flag.clone();
        use_effect_with(flag, move |_| {
            *flag_ref.borrow_mut() = flag;
            || ()
        });
    }

    // One polling step: fetch, fall back locally on any failure, republish
    // the arrival into the feed. Errors never escape this cycle.
    let run_prediction = {
        let prediction = prediction.clone();
        let offline = offline.clone();
        let loading = loading.clone();
        let push = notif_ctx.push.clone();
        Callback::from(move |_: ()| {
            let prediction = prediction.clone();
            let offline = offline.clone();
            let loading = loading.clone();
            let push = push.clone();
            loading.set(true);
            spawn_local(async move {
                let req = PredictionRequest::default();
                let record = match predict::fetch_prediction(&req).await {
                    Ok(record) => {
                        offline.set(false);
                        record
                    }
                    Err(err) => {
                        clog(&format!("prediction fetch failed: {err}"));
                        offline.set(true);
                        predict::fallback_record(&req, iso_timestamp())
                    }
                };
                push.emit(notify::prediction_alert(&record, random_sector()));
                prediction.set(Some(record));
                loading.set(false);
            });
        })
    };

    // Mount effect: canvas setup, pointer listeners, render loops, timers.
    {
        let tactical_canvas = tactical_canvas.clone();
        let heat_canvas = heat_canvas.clone();
        let tactical_view = tactical_view.clone();
        let heat_view = heat_view.clone();
        let gesture = gesture.clone();
        let selected_heat_flag = selected_heat_flag.clone();
        let push = notif_ctx.push.clone();
        let run_prediction = run_prediction.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let tactical: HtmlCanvasElement =
                tactical_canvas.cast::<HtmlCanvasElement>().expect("canvas");
            let heat: HtmlCanvasElement = heat_canvas.cast::<HtmlCanvasElement>().expect("canvas");
            tactical.set_width(CANVAS_WIDTH);
            tactical.set_height(CANVAS_HEIGHT);
            heat.set_width(CANVAS_WIDTH);
            heat.set_height(CANVAS_HEIGHT);

            // Surfaces not ready: skip quietly, nothing to tear down.
            if context_2d(&tactical).is_none() || context_2d(&heat).is_none() {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            }

            let tactical_draw: Rc<dyn Fn()> = {
                let canvas = tactical.clone();
                let view = tactical_view.clone();
                let entities = catalog::map_entities();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let Some(ctx) = context_2d(&canvas) else {
                        return;
                    };
                    let w = canvas.width() as f64;
                    let h = canvas.height() as f64;
                    let pulse = (js_sys::Date::now() % PULSE_PERIOD_MS) / PULSE_PERIOD_MS;
                    render::tactical::draw(&ctx, w, h, &view.borrow(), &entities, pulse);
                })
            };

            let heat_draw: Rc<dyn Fn()> = {
                let canvas = heat.clone();
                let view = heat_view.clone();
                let samples = catalog::heat_samples();
                let selected = selected_heat_flag.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let Some(ctx) = context_2d(&canvas) else {
                        return;
                    };
                    let w = canvas.width() as f64;
                    let h = canvas.height() as f64;
                    render::heat::draw(&ctx, w, h, &view.borrow(), &samples, *selected.borrow());
                })
            };

            let tactical_loop = FrameLoop::start(&window, tactical_draw);
            let heat_loop = FrameLoop::start(&window, heat_draw);

            // Pointer-down starts a drag on the surface it fired over.
            let make_mousedown = |surface: SurfaceId| {
                let gesture = gesture.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    gesture
                        .borrow_mut()
                        .pointer_down(surface, e.client_x() as f64, e.client_y() as f64);
                }) as Box<dyn FnMut(_)>)
            };
            let tactical_mousedown = make_mousedown(SurfaceId::Tactical);
            let heat_mousedown = make_mousedown(SurfaceId::Heat);

            // Moves pan whichever surface owns the active session; the
            // listener is window-level so a drag keeps tracking off-canvas.
            let mousemove_cb = {
                let gesture = gesture.clone();
                let tactical_view = tactical_view.clone();
                let heat_view = heat_view.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let moved = gesture
                        .borrow_mut()
                        .pointer_move(e.client_x() as f64, e.client_y() as f64);
                    if let Some((surface, dx, dy)) = moved {
                        match surface {
                            SurfaceId::Tactical => tactical_view.borrow_mut().pan_by(dx, dy),
                            SurfaceId::Heat => heat_view.borrow_mut().pan_by(dx, dy),
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };

            // Release anywhere in the document ends the drag.
            let mouseup_cb = {
                let gesture = gesture.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    gesture.borrow_mut().pointer_up();
                }) as Box<dyn FnMut(_)>)
            };

            // Wheel zoom targets the surface under the cursor, independent
            // of any drag in progress.
            let make_wheel = |view: Rc<std::cell::RefCell<Viewport>>| {
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    view.borrow_mut().apply_wheel(e.delta_y());
                }) as Box<dyn FnMut(_)>)
            };
            let tactical_wheel = make_wheel(tactical_view.clone());
            let heat_wheel = make_wheel(heat_view.clone());

            tactical
                .add_event_listener_with_callback(
                    "mousedown",
                    tactical_mousedown.as_ref().unchecked_ref(),
                )
                .ok();
            heat.add_event_listener_with_callback(
                "mousedown",
                heat_mousedown.as_ref().unchecked_ref(),
            )
            .ok();
            tactical
                .add_event_listener_with_callback("wheel", tactical_wheel.as_ref().unchecked_ref())
                .ok();
            heat.add_event_listener_with_callback("wheel", heat_wheel.as_ref().unchecked_ref())
                .ok();
            window
                .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
                .ok();
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .ok();

            // Initial fetch plus the fixed polling cadence.
            run_prediction.emit(());
            let poll_task = {
                let run_prediction = run_prediction.clone();
                IntervalTask::start(&window, predict::POLL_INTERVAL_MS, move || {
                    run_prediction.emit(());
                })
            };

            // Startup alerts for the catalog's seeded threat points.
            let catalog_alert_task = {
                let push = push.clone();
                TimeoutTask::start(&window, CATALOG_ALERT_DELAY_MS, move || {
                    for entity in catalog::entities_of_kind(&catalog::map_entities(), EntityKind::Threat)
                    {
                        push.emit(notify::catalog_threat_alert(entity, random_sector()));
                    }
                })
            };

            // Simulated random threat feed, 70% chance per tick.
            let sim_threat_task = {
                let push = push.clone();
                IntervalTask::start(&window, SIM_THREAT_INTERVAL_MS, move || {
                    if js_sys::Math::random() > 0.3 {
                        push.emit(notify::simulated_threat(
                            js_sys::Math::random(),
                            js_sys::Math::random(),
                            random_window_position(),
                            random_sector(),
                        ));
                    }
                })
            };

            let window_cleanup = window.clone();
            Box::new(move || {
                let _ = tactical.remove_event_listener_with_callback(
                    "mousedown",
                    tactical_mousedown.as_ref().unchecked_ref(),
                );
                let _ = heat.remove_event_listener_with_callback(
                    "mousedown",
                    heat_mousedown.as_ref().unchecked_ref(),
                );
                let _ = tactical.remove_event_listener_with_callback(
                    "wheel",
                    tactical_wheel.as_ref().unchecked_ref(),
                );
                let _ = heat.remove_event_listener_with_callback(
                    "wheel",
                    heat_wheel.as_ref().unchecked_ref(),
                );
                let _ = window_cleanup.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = window_cleanup.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                tactical_loop.cancel();
                heat_loop.cancel();
                if let Some(t) = &poll_task {
                    t.cancel();
                }
                if let Some(t) = &catalog_alert_task {
                    t.cancel();
                }
                if let Some(t) = &sim_threat_task {
                    t.cancel();
                }
                let _keep_alive = (
                    &tactical_mousedown,
                    &heat_mousedown,
                    &tactical_wheel,
                    &heat_wheel,
                    &mousemove_cb,
                    &mouseup_cb,
                );
            }) as Box<dyn FnOnce()>
        });
    }

    // Heat-kind selector and toolbar zoom callbacks.
    let select_heat = |kind: HeatKind| {
        let selected_heat = selected_heat.clone();
        Callback::from(move |_: MouseEvent| selected_heat.set(kind))
    };
    let heat_zoom = |delta: f64| {
        let heat_view = heat_view.clone();
        Callback::from(move |_: MouseEvent| heat_view.borrow_mut().zoom_step(delta))
    };

    let toggle_details = {
        let show_details = show_details.clone();
        Callback::from(move |_| show_details.set(true))
    };
    let close_details = {
        let show_details = show_details.clone();
        Callback::from(move |_: MouseEvent| show_details.set(false))
    };
    let predict_now = {
        let run_prediction = run_prediction.clone();
        Callback::from(move |_: MouseEvent| run_prediction.emit(()))
    };

    let entities = catalog::map_entities();
    let samples = catalog::heat_samples();
    let threat_count = catalog::entities_of_kind(&entities, EntityKind::Threat).len();
    let friendly_count = catalog::entities_of_kind(&entities, EntityKind::Friendly).len();
    let camera_count = catalog::entities_of_kind(&entities, EntityKind::Camera).len();
    let activity_zones = catalog::samples_of_kind(&samples, HeatKind::Activity).len();
    let threat_areas = catalog::samples_of_kind(&samples, HeatKind::Threat).len();
    let movement_patterns = catalog::samples_of_kind(&samples, HeatKind::Movement).len();

    let heat_button = |kind: HeatKind| {
        let active = *selected_heat == kind;
        let style = if active {
            "background:#00ff73; color:#0e1116; font-weight:700;"
        } else {
            ""
        };
        html! { <button style={style} onclick={select_heat(kind)}>{ kind.label() }</button> }
    };

    let details_modal = if *show_details {
        if let Some(record) = &*prediction {
            html! {
                <div style="position:absolute; inset:0; z-index:70; background:rgba(0,0,0,0.7); display:flex; align-items:center; justify-content:center;">
                    <div style="background:#161b22; border:1px solid #30363d; border-radius:8px; padding:20px; width:520px; max-width:90%;">
                        <h3 style="margin:0 0 12px 0; color:#00ff73;">{"PREDICTIVE THREAT ENGINE ANALYSIS"}</h3>
                        <div style="display:grid; grid-template-columns:1fr 1fr; gap:10px; font-size:13px;">
                            <div>{ format!("Risk level: {}", record.risk_level.label()) }</div>
                            <div>{ format!("Score: {:.2}", record.risk_score) }</div>
                            <div>{ format!("Latitude: {}", record.coordinates.lat) }</div>
                            <div>{ format!("Longitude: {}", record.coordinates.lon) }</div>
                            <div>{ format!("Wind: {} km/h", record.environmental_factors.wind_speed) }</div>
                            <div>{ format!("Temp: {}\u{b0}C", record.environmental_factors.temperature) }</div>
                            <div>{ format!("Previous threats: {}", record.threat_history.last_threat_count) }</div>
                        </div>
                        { if record.recommendations.is_empty() { html!{} } else { html!{
                            <div style="margin-top:12px;">
                                <div style="font-weight:600; margin-bottom:6px;">{"RECOMMENDATIONS"}</div>
                                <ul style="margin:0; padding-left:18px; font-size:13px;">
                                    { for record.recommendations.iter().map(|r| html!{ <li>{ r }</li> }) }
                                </ul>
                            </div>
                        } } }
                        <div style="margin-top:16px; text-align:right;">
                            <button onclick={close_details}>{"CLOSE REPORT"}</button>
                        </div>
                    </div>
                </div>
            }
        } else {
            html! {}
        }
    } else {
        html! {}
    };

    html! {
        <div style="height:100%; display:flex; flex-direction:column; position:relative;">
            <RiskBadge record={(*prediction).clone()} offline={*offline} on_click={toggle_details} />
            { details_modal }
            <div style="flex:1; display:flex; gap:12px; padding:12px;">
                <div style="flex:1; display:flex; flex-direction:column;">
                    <div style="display:flex; justify-content:space-between; margin-bottom:6px;">
                        <span style="font-weight:700; color:#00ff73;">{"TACTICAL OVERVIEW"}</span>
                        <span style="font-size:11px; opacity:0.7;">{"drag to pan, wheel to zoom"}</span>
                    </div>
                    <canvas ref={tactical_canvas}
                        style="flex:1; width:100%; background:rgba(0,0,0,0.5); border:1px solid #30363d; border-radius:4px; cursor:grab;" />
                    <div style="display:flex; gap:16px; margin-top:6px; font-size:11px; opacity:0.8;">
                        <span>{ format!("{} THREATS", threat_count) }</span>
                        <span>{ format!("{} UNITS", friendly_count) }</span>
                        <span>{ format!("{} CAMERAS", camera_count) }</span>
                    </div>
                </div>
                <div style="flex:1; display:flex; flex-direction:column;">
                    <div style="display:flex; justify-content:space-between; margin-bottom:6px;">
                        <span style="font-weight:700; color:#00ff73;">{"HEAT MAP ANALYSIS"}</span>
                        <div style="display:flex; gap:4px;">
                            { heat_button(HeatKind::Activity) }
                            { heat_button(HeatKind::Threat) }
                            { heat_button(HeatKind::Movement) }
                            <button onclick={heat_zoom(-0.25)}>{"-"}</button>
                            <button onclick={heat_zoom(0.25)}>{"+"}</button>
                        </div>
                    </div>
                    <canvas ref={heat_canvas}
                        style="flex:1; width:100%; background:rgba(0,0,0,0.5); border:1px solid #30363d; border-radius:4px; cursor:grab;" />
                    <div style="display:flex; gap:16px; margin-top:6px; font-size:11px; opacity:0.8;">
                        <span>{ format!("{} ACTIVITY ZONES", activity_zones) }</span>
                        <span>{ format!("{} THREAT AREAS", threat_areas) }</span>
                        <span>{ format!("{} MOVEMENT PATTERNS", movement_patterns) }</span>
                    </div>
                </div>
            </div>
            <div style="display:flex; align-items:center; justify-content:space-between; padding:10px 12px; background:#161b22; border-top:1px solid #30363d; font-size:12px;">
                <div style="display:flex; gap:16px; opacity:0.8;">
                    <span>{"SYSTEMS ONLINE"}</span>
                    <span>{"GPS ACTIVE"}</span>
                    <span>{"SURVEILLANCE ACTIVE"}</span>
                </div>
                <div style="display:flex; gap:16px; align-items:center;">
                    <span style="opacity:0.7;">{ format!("HEAT MAP: {}", selected_heat.label()) }</span>
                    <button onclick={predict_now} disabled={*loading}>
                        { if *loading { "PROCESSING..." } else { "RUN THREAT PREDICTION" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
