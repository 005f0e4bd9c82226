use dioxus::prelude::*;
use supper_common::{ClientState, DietaryPreference};
use supper_core::SupperClient;
use supper_ui::{IdeasPanelView, MainHeaderView, PageCard, PreferenceFormView};
use tracing::error;

/// Preference form, results, export and share
#[component]
pub fn MainPage(state: Signal<ClientState>) -> Element {
    let client = use_context::<SupperClient>();
    // Raw text as typed; the parsed values live in the page state. Preferences
    // outlive a sign-out, so a fresh mount starts from what will be submitted.
    let mut cuisines_text = use_signal(|| state.peek().preferences.cuisines_display());
    let mut time_text = use_signal(|| state.peek().preferences.time_budget_display());

    // Handlers read the state as it is when they run, not at render time
    let current = move || state.peek().clone();
    let publish = move |next: ClientState| {
        let mut state = state;
        state.set(next);
    };

    let snapshot = state.read().clone();
    let ideas = snapshot.ideas.clone().filter(|ideas| !ideas.is_empty());
    let email = snapshot.identity.as_ref().and_then(|i| i.email.clone());

    let sign_out_client = client.clone();
    let on_sign_out = move |_: ()| {
        let client = sign_out_client.clone();
        spawn(async move { client.sign_out().await });
    };

    let submit_client = client.clone();
    let on_submit = move |_: ()| {
        let client = submit_client.clone();
        spawn(async move { client.submit_ideas(current(), current, publish).await });
    };

    let image_client = client.clone();
    let on_select_meal = move |meal: String| {
        let client = image_client.clone();
        spawn(async move { client.choose_meal(current(), meal, current, publish).await });
    };

    let export_client = client.clone();
    let on_export = move |_: ()| {
        if let Err(e) = export_client.export(&current()) {
            error!("Error exporting supper ideas: {}", e);
        }
    };

    let on_share = move |_: ()| {
        let client = client.clone();
        spawn(async move {
            let outcome = client.share(&current()).await;
            publish(outcome.apply(current()));
        });
    };

    rsx! {
        PageCard { wide: true,
            MainHeaderView { email, on_sign_out }
            PreferenceFormView {
                diet: snapshot.preferences.diet,
                cuisines: cuisines_text(),
                include: snapshot.preferences.include.clone(),
                exclude: snapshot.preferences.exclude.clone(),
                time_budget: time_text(),
                loading: snapshot.loading,
                on_diet: move |diet: DietaryPreference| publish(current().with_diet(diet)),
                on_cuisines: move |v: String| {
                    publish(current().with_cuisines_input(&v));
                    cuisines_text.set(v);
                },
                on_include: move |v: String| publish(current().with_include(v)),
                on_exclude: move |v: String| publish(current().with_exclude(v)),
                on_time_budget: move |v: String| {
                    publish(current().with_time_budget_input(&v));
                    time_text.set(v);
                },
                on_submit,
            }
            if let Some(ideas) = ideas {
                IdeasPanelView {
                    ideas,
                    selected_meal: snapshot.selected_meal.clone(),
                    image_url: snapshot.image_url.clone(),
                    image_loading: snapshot.image_loading,
                    on_select_meal,
                    on_export,
                    on_share,
                }
            }
        }
    }
}
