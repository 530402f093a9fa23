use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::interaction::reveal::{Reveal, RevealTimer};

/// Flips to [`Reveal::Shown`] once, `config::REVEAL_DELAY_MS` after mount.
/// The pending timer is dropped (and therefore cancelled) on unmount.
#[hook]
pub fn use_reveal() -> Reveal {
    let reveal = use_state(Reveal::default);

    {
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |_| {
                let guard = Rc::new(RefCell::new(RevealTimer::armed()));
                let timeout = {
                    let guard = guard.clone();
                    Timeout::new(config::REVEAL_DELAY_MS, move || {
                        if guard.borrow_mut().fire() {
                            reveal.set(guard.borrow().state());
                        }
                    })
                };

                move || {
                    guard.borrow_mut().disarm();
                    drop(timeout);
                }
            },
            (),
        );
    }

    *reveal
}

/// Logs a failed listener attach or detach. Returns whether `result` was ok.
fn warn_on_err<E: std::fmt::Debug>(result: Result<(), E>, action: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to {}: {:?}", action, e);
            false
        }
    }
}

/// Calls `on_scroll` with the window's vertical offset on every scroll event
/// and once on mount. The listener lives as long as the calling component.
#[hook]
pub fn use_window_scroll(on_scroll: Callback<f64>) {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let window_clone = window.clone();
                let on_scroll_listener = on_scroll.clone();
                let callback = Closure::wrap(Box::new(move || match window_clone.scroll_y() {
                    Ok(offset) => on_scroll_listener.emit(offset),
                    Err(_) => warn!("Could not read scroll position"),
                }) as Box<dyn FnMut()>);

                warn_on_err(
                    window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()),
                    "attach scroll listener",
                );
                if let Ok(offset) = window.scroll_y() {
                    on_scroll.emit(offset);
                }
                (window.clone(), callback)
            });

            move || {
                if let Some((window, callback)) = listener {
                    if warn_on_err(
                        window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()),
                        "detach scroll listener",
                    ) {
                        debug!("Detached scroll listener");
                    }
                }
            }
        },
        (),
    );
}

/// Calls `on_pointer_down` for every `mousedown` on the document with whether
/// the target sits inside an element matching `selector`.
#[hook]
pub fn use_pointer_down_inside(selector: &'static str, on_pointer_down: Callback<bool>) {
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window().and_then(|window| window.document());
            let listener = document.map(|document| {
                let callback = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                    let inside = event
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                        .and_then(|element| element.closest(selector).ok().flatten())
                        .is_some();
                    on_pointer_down.emit(inside);
                }) as Box<dyn FnMut(web_sys::MouseEvent)>);

                warn_on_err(
                    document.add_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref()),
                    "attach pointer-down listener",
                );
                (document, callback)
            });

            move || {
                if let Some((document, callback)) = listener {
                    warn_on_err(
                        document.remove_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref()),
                        "detach pointer-down listener",
                    );
                }
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_results_are_reported() {
        assert!(warn_on_err::<()>(Ok(()), "attach scroll listener"));
        assert!(!warn_on_err(Err("detached twice"), "detach scroll listener"));
    }
}
