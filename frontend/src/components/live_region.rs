use yew::prelude::*;

use crate::services::live_region::LiveRegion;

#[derive(Properties, PartialEq)]
pub struct LiveRegionViewProps {
    pub region: LiveRegion,
}

/// Visually hidden `aria-live` element mirroring the shared announcement slot.
#[function_component(LiveRegionView)]
pub fn live_region_view(props: &LiveRegionViewProps) -> Html {
    let trigger = use_force_update();

    {
        let region = props.region.clone();
        use_effect_with_deps(
            move |region| {
                region.subscribe(Callback::from(move |_| trigger.force_update()));
                let region = region.clone();
                move || region.unsubscribe()
            },
            region,
        );
    }

    html! {
        <div class="sr-only" aria-live="polite" aria-atomic="true">
            {props.region.current().unwrap_or_default()}
        </div>
    }
}
