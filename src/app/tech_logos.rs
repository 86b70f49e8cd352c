use leptos::prelude::*;

use crate::content::{TechCategory, TECH_CATEGORIES};

/// Logo grid for the tech stack. Most logos come from the Simple Icons CDN
/// so nothing heavy ends up in the bundle.
#[component]
pub fn TechLogos() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-6">
            {TECH_CATEGORIES
                .iter()
                .map(|category| view! { <CategoryCard category /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn CategoryCard(category: &'static TechCategory) -> impl IntoView {
    view! {
        <article class="card-elevated p-6">
            <h3 class="font-semibold mb-3">{category.title}</h3>
            <ul class="flex flex-wrap items-center gap-4">
                {category
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="flex items-center gap-2">
                                <img
                                    src=item.src
                                    alt=item.alt()
                                    loading="lazy"
                                    width="36"
                                    height="36"
                                    class="h-9 w-9 object-contain"
                                />
                                <span class="text-sm text-muted-foreground">{item.name}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}
