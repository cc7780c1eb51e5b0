use yew::prelude::*;

/// Live usage of a length-limited field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharCount {
    pub current: usize,
    pub max: usize,
}

impl CharCount {
    pub fn of(value: &str, max: usize) -> Self {
        Self { current: value.chars().count(), max }
    }

    /// True once usage goes past `ratio` of the maximum.
    pub fn is_warning(&self, ratio: f64) -> bool {
        self.max > 0 && self.current as f64 > self.max as f64 * ratio
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.current, self.max)
    }
}

#[derive(Properties, PartialEq)]
pub struct CharacterCounterProps {
    pub value: String,
    pub max: usize,
    pub warning_ratio: f64,
}

#[function_component(CharacterCounter)]
pub fn character_counter(props: &CharacterCounterProps) -> Html {
    let count = CharCount::of(&props.value, props.max);
    html! {
        <div class={classes!("char-counter", count.is_warning(props.warning_ratio).then(|| "warning"))}>
            {count.label()}
        </div>
    }
}
