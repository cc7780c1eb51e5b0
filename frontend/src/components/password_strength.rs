use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Strength::Weak,
            2 | 3 => Strength::Medium,
            _ => Strength::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

/// One point each for: length >= 8, lowercase, uppercase, digit, symbol.
pub fn score(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_lowercase()),
        password.chars().any(|c| c.is_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
    ];
    checks.iter().filter(|passed| **passed).count() as u8
}

#[derive(Properties, PartialEq)]
pub struct PasswordStrengthProps {
    pub value: String,
}

#[function_component(PasswordStrengthMeter)]
pub fn password_strength_meter(props: &PasswordStrengthProps) -> Html {
    if props.value.is_empty() {
        return html! {};
    }
    let score = score(&props.value);
    let strength = Strength::from_score(score);
    let width = format!("width: {}%;", u32::from(score) * 20);

    html! {
        <div class={classes!("password-strength", strength.class())}>
            <div class="strength-bar">
                <div class="strength-fill" style={width}></div>
            </div>
            <span class="strength-label">{strength.label()}</span>
        </div>
    }
}
