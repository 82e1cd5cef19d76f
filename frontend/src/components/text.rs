use yew::prelude::*;

use crate::content::emphasis_runs;

#[derive(Properties, PartialEq)]
pub struct SectionLabelProps {
    pub text: AttrValue,
}

#[function_component(SectionLabel)]
pub fn section_label(props: &SectionLabelProps) -> Html {
    html! { <span class="section-label">{ props.text.clone() }</span> }
}

#[derive(Properties, PartialEq)]
pub struct RichTextProps {
    pub text: &'static str,
    #[prop_or_default]
    pub class: Classes,
}

/// Paragraph with `*marked*` runs rendered as emphasis.
#[function_component(RichText)]
pub fn rich_text(props: &RichTextProps) -> Html {
    html! {
        <p class={props.class.clone()}>
            { for emphasis_runs(props.text).into_iter().map(|(emphasised, run)| {
                if emphasised {
                    html! { <em class="emphasis">{ run }</em> }
                } else {
                    html! { { run } }
                }
            }) }
        </p>
    }
}
