//! Form controls shared by settings-style pages.
//!
//! # Design
//! - Controls stay presentation-only; they emit plain values via callbacks.
//! - The slider contract is a scalar `u32`; range selections do not exist
//!   at this layer.

use yew::prelude::*;

/// Props for [`Checkbox`].
#[derive(Properties, PartialEq)]
pub(crate) struct CheckboxProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub onchange: Callback<bool>,
}

#[function_component(Checkbox)]
pub(crate) fn checkbox(props: &CheckboxProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.checked());
            }
        })
    };

    html! {
        <label class="checkbox-row">
            <input
                type="checkbox"
                class="checkbox"
                checked={props.checked}
                onchange={onchange}
            />
            <span>{props.label.clone()}</span>
        </label>
    }
}

/// Props for [`Slider`].
#[derive(Properties, PartialEq)]
pub(crate) struct SliderProps {
    pub id: AttrValue,
    pub value: u32,
    pub min: u32,
    pub max: u32,
    #[prop_or(1u32)]
    pub step: u32,
    /// Tick values rendered through a `datalist`; empty renders none.
    #[prop_or_default]
    pub marks: Vec<u32>,
    #[prop_or_default]
    pub onchange: Callback<u32>,
}

#[function_component(Slider)]
pub(crate) fn slider(props: &SliderProps) -> Html {
    let oninput = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                if let Ok(parsed) = input.value().parse::<u32>() {
                    onchange.emit(parsed);
                }
            }
        })
    };
    let list_id = format!("{}-marks", props.id);

    html! {
        <>
            <input
                type="range"
                id={props.id.clone()}
                class="range"
                min={props.min.to_string()}
                max={props.max.to_string()}
                step={props.step.to_string()}
                value={props.value.to_string()}
                list={(!props.marks.is_empty()).then(|| AttrValue::from(list_id.clone()))}
                oninput={oninput}
            />
            if !props.marks.is_empty() {
                <datalist id={list_id}>
                    { for props.marks.iter().map(|mark| html! {
                        <option value={mark.to_string()} label={mark.to_string()} />
                    }) }
                </datalist>
            }
        </>
    }
}
