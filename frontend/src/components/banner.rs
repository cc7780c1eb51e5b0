use yew::prelude::*;

use crate::forms::model::{Banner, BannerKind};

#[derive(Properties, PartialEq)]
pub struct BannerStackProps {
    pub banners: Vec<Banner>,
}

#[function_component(BannerStack)]
pub fn banner_stack(props: &BannerStackProps) -> Html {
    html! {
        <div class="form-banners">
            { for props.banners.iter().map(|banner| {
                let (class, role) = match banner.kind {
                    BannerKind::Success => ("form-banner success", "status"),
                    BannerKind::Error => ("form-banner error", "alert"),
                };
                html! {
                    <div key={banner.id} class={class} role={role}>
                        {&banner.message}
                    </div>
                }
            }) }
        </div>
    }
}
