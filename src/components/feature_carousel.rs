use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Advance interval for the rotating highlight.
const ROTATE_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCarouselProps {
    pub features: Vec<Feature>,
}

/// Rotating "why choose us" highlight. Advances on a fixed interval, wraps at
/// the end of the list, and lets the visitor jump to a slide with the dots.
/// Purely cosmetic; independent of the inquiry form.
#[function_component(FeatureCarousel)]
pub fn feature_carousel(props: &FeatureCarouselProps) -> Html {
    let active = use_state(|| 0usize);

    // Reschedule after every advance (and after a manual dot click) so the
    // pending timeout is always relative to the current slide. Dropping the
    // handle in the cleanup cancels it on unmount.
    {
        let current = *active;
        let len = props.features.len();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(ROTATE_MS, move || {
                    active.set(next_index(current, len));
                });
                move || drop(timeout)
            },
            (current, len),
        );
    }

    html! {
        <div class="feature-carousel">
            <div class="carousel-track">
                {
                    props.features.iter().enumerate().map(|(index, feature)| {
                        let slide_class = if index == *active { "carousel-slide active" } else { "carousel-slide" };
                        html! {
                            <div key={index} class={slide_class}>
                                <div class="carousel-icon">{feature.icon}</div>
                                <div>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.desc}</p>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="carousel-dots">
                {
                    (0..props.features.len()).map(|index| {
                        let active = active.clone();
                        let dot_class = if index == *active { "carousel-dot active" } else { "carousel-dot" };
                        html! {
                            <button
                                key={index}
                                class={dot_class}
                                onclick={Callback::from(move |_| active.set(index))}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::next_index;

    #[test]
    fn advances_and_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn empty_list_stays_put() {
        assert_eq!(next_index(0, 0), 0);
    }
}
