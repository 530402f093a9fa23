use yew::prelude::*;

use crate::config::stagger_style;
use crate::content::model::Metric;
use crate::interaction::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct MetricGridProps {
    pub metrics: &'static [Metric],
    pub reveal: Reveal,
    #[prop_or_default]
    pub class: Classes,
}

/// Metric tiles whose values stay on the placeholder until `reveal` is shown.
#[function_component(MetricGrid)]
pub fn metric_grid(props: &MetricGridProps) -> Html {
    if props.metrics.is_empty() {
        return html! {};
    }

    html! {
        <div class={classes!("metric-grid", props.class.clone())}>
            { for props.metrics.iter().enumerate().map(|(i, metric)| html! {
                <div
                    class={classes!("metric", props.reveal.entrance_class())}
                    style={stagger_style(i)}
                >
                    <div class="metric-value gradient-text">{props.reveal.metric(metric.value)}</div>
                    <div class="metric-label">{metric.label}</div>
                    <div class={classes!("metric-trend", metric.trend.class_name())}>
                        {metric.trend.arrow()}
                    </div>
                </div>
            }) }
        </div>
    }
}
