use yew::prelude::*;

use crate::content::model::Icon;

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
        <i class={classes!("icon", props.icon.class_name())} aria-hidden="true">
            {props.icon.glyph()}
        </i>
    }
}
