use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::warn;
use web_sys::js_sys::Date;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::reveal::{
    OnceVisible, RevealAction, RevealConfig, RevealTimeline, RootMargin, SharedObserver,
};

#[derive(Properties, PartialEq)]
pub struct FadeUpProps {
    #[prop_or_default]
    pub children: Children,
    /// Seconds to wait after the block comes into view before fading in.
    #[prop_or_default]
    pub delay: f64,
    /// CSS `rootMargin` shorthand overriding the default lead margin, e.g. `"-100px"`.
    #[prop_or_default]
    pub margin: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

fn reveal_config(delay: f64, margin: Option<&str>) -> RevealConfig {
    let reveal = RevealConfig::default().with_delay_secs(delay);
    match margin.map(str::parse::<RootMargin>) {
        Some(Ok(margin)) => reveal.with_margin(margin),
        Some(Err(err)) => {
            warn!("Ignoring reveal margin: {}", err);
            reveal
        }
        None => reveal,
    }
}

/// Renders its children hidden and 50px low, then fades them up the first time
/// they come within the reveal margin of the viewport.
#[function_component(FadeUpWhenVisible)]
pub fn fade_up_when_visible(props: &FadeUpProps) -> Html {
    let node = use_node_ref();
    let observer = use_context::<SharedObserver>().unwrap_or_default();
    let timeline = {
        let delay = props.delay;
        let margin = props.margin.clone();
        use_reducer_eq(move || RevealTimeline::new(reveal_config(delay, margin.as_deref())))
    };

    // Watch visibility until the first report that the block is in view; the
    // observation ends there, or on unmount.
    {
        let node = node.clone();
        let dispatcher = timeline.dispatcher();
        let margin = timeline.config().margin;
        use_effect_with_deps(
            move |_| {
                let on_visible = Callback::from(move |()| {
                    dispatcher.dispatch(RevealAction::Visibility {
                        visible: true,
                        at: Date::now(),
                    });
                });
                let watch = node.cast::<Element>().and_then(|element| {
                    OnceVisible::observe(&*observer.0, &element, margin, on_visible)
                        .map_err(|err| warn!("Reveal observation unavailable: {}", err))
                        .ok()
                });
                move || drop(watch)
            },
            (),
        );
    }

    // Once triggered, wait out the delay and then tick frames until the block settles.
    {
        let dispatcher = timeline.dispatcher();
        let snapshot = *timeline;
        use_effect_with_deps(
            move |_| {
                let ticker: Rc<RefCell<Option<Interval>>> = Rc::default();
                let timeout = snapshot.frames_due_in(Date::now()).map(|wait| {
                    let ticker = ticker.clone();
                    Timeout::new(wait as u32, move || {
                        let interval = Interval::new(config::FRAME_INTERVAL_MS, move || {
                            dispatcher.dispatch(RevealAction::Frame { at: Date::now() });
                        });
                        *ticker.borrow_mut() = Some(interval);
                    })
                });
                move || {
                    drop(timeout);
                    ticker.borrow_mut().take();
                }
            },
            (timeline.starts_at(), timeline.is_settled()),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("fade-up", props.class.clone())}
            style={timeline.visual().style()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn margin_prop_overrides_default_lead() {
        let reveal = reveal_config(0.4, Some("-100px"));
        assert_eq!(reveal.margin, RootMargin::uniform(-100.0));
        assert_eq!(reveal.delay, Duration::from_millis(400));
    }

    #[test]
    fn malformed_margin_keeps_default() {
        assert_eq!(reveal_config(0.0, Some("ten px")), RevealConfig::default());
        assert_eq!(reveal_config(0.0, None).margin, RootMargin::vertical(100.0));
    }
}
