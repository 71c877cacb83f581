// web_app/components/fragrance.rs - Catalog record display components
//
// Cards and grids for fragrances, flat items (notes, accords,
// perfumers) and brands, plus the fragrance detail modal.

use leptos::prelude::*;

use crate::web_app::components::common::{Badge, ModalWrapper};
use crate::web_app::filters::text::tokens;
use crate::web_app::model::{Brand, CatalogItem, CatalogKind, Fragrance, NoteLayer};

/// "Brand · 2019" subtitle, leaving out whatever is unknown
pub fn fragrance_subtitle(fragrance: &Fragrance) -> String {
    let mut parts = Vec::new();
    if let Some(brand) = fragrance.brand.as_deref().filter(|b| !b.trim().is_empty()) {
        parts.push(brand.to_string());
    }
    if let Some(year) = fragrance.release_year() {
        parts.push(year.to_string());
    }
    parts.join(" · ")
}

/// Fragrance card in the grid
#[component]
pub fn FragranceCard(
    fragrance: Fragrance,
    /// Called with the fragrance when the card is clicked
    on_select: Callback<Fragrance>,
) -> impl IntoView {
    let subtitle = fragrance_subtitle(&fragrance);
    let accords: Vec<String> = tokens(fragrance.accords.as_deref()).take(4).map(str::to_string).collect();
    let gender = fragrance.gender.clone().filter(|g| !g.trim().is_empty());
    let name = fragrance.name.clone();

    view! {
        <div
            class="bg-white rounded-xl border border-gray-100 shadow-sm hover:shadow-md \
                   hover:-translate-y-0.5 transition-all cursor-pointer p-5 flex flex-col gap-3"
            on:click=move |_| on_select.run(fragrance.clone())
        >
            <div class="flex items-start justify-between gap-2">
                <h3 class="font-bold text-gray-900 leading-tight">{name}</h3>
                {gender.map(|g| view! { <Badge variant="gray">{g}</Badge> })}
            </div>
            <p class="text-sm text-gray-500">{subtitle}</p>
            <div class="flex flex-wrap gap-1.5 mt-auto">
                {accords.into_iter().map(|accord| view! {
                    <Badge variant="rose">{accord}</Badge>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Grid of fragrance cards
#[component]
pub fn FragranceGrid(
    fragrances: Memo<Vec<Fragrance>>,
    on_select: Callback<Fragrance>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-5">
            <For
                each=move || fragrances.get()
                key=|fragrance| fragrance.id
                children=move |fragrance| view! {
                    <FragranceCard fragrance=fragrance on_select=on_select />
                }
            />
        </div>
    }
}

/// Links to the note pages of one layer; hidden when the layer is empty
#[component]
fn NoteLayerRow(layer: NoteLayer, notes: Option<String>) -> impl IntoView {
    let notes: Vec<String> = tokens(notes.as_deref()).map(str::to_string).collect();
    (!notes.is_empty()).then(|| view! {
        <div class="flex flex-col gap-1.5">
            <span class="text-xs font-semibold text-gray-500 uppercase tracking-wider">
                {format!("{} notes", layer)}
            </span>
            <div class="flex flex-wrap gap-1.5">
                {notes.into_iter().map(|note| {
                    let href = format!("/notes/{}", note);
                    view! {
                        <a href=href class="hover:opacity-80">
                            <Badge variant="amber">{note}</Badge>
                        </a>
                    }
                }).collect_view()}
            </div>
        </div>
    })
}

/// Fragrance details in a modal
#[component]
pub fn FragranceDetail(fragrance: Fragrance, on_close: Callback<()>) -> impl IntoView {
    let subtitle = fragrance_subtitle(&fragrance);
    let accords: Vec<String> = tokens(fragrance.accords.as_deref()).map(str::to_string).collect();
    let layers: Vec<(NoteLayer, Option<String>)> = NoteLayer::ALL
        .into_iter()
        .map(|layer| (layer, fragrance.notes(layer).map(str::to_string)))
        .collect();

    view! {
        <ModalWrapper on_close=on_close title=fragrance.name.clone()>
            <div class="space-y-5">
                <p class="text-gray-600">{subtitle}</p>
                <div class="flex flex-wrap gap-1.5">
                    {accords.into_iter().map(|accord| view! {
                        <Badge variant="rose">{accord}</Badge>
                    }).collect_view()}
                </div>
                {layers.into_iter().map(|(layer, notes)| view! {
                    <NoteLayerRow layer=layer notes=notes />
                }).collect_view()}
            </div>
        </ModalWrapper>
    }
}

/// Popularity caption of a flat item, worded per collection
pub fn popularity_label(kind: CatalogKind, item: &CatalogItem) -> String {
    let count = item.popularity();
    match kind {
        CatalogKind::Perfumers => format!("{} fragrances created", count),
        CatalogKind::Notes | CatalogKind::Accords => format!("in {} fragrances", count),
    }
}

/// Note, accord or perfumer card
#[component]
pub fn ItemCard(item: CatalogItem, kind: CatalogKind) -> impl IntoView {
    let caption = popularity_label(kind, &item);
    let body = view! {
        <h3 class="font-semibold text-gray-900">{item.name.clone()}</h3>
        <p class="text-sm text-gray-500 mt-1">{caption}</p>
    };
    let class = "block bg-white rounded-xl border border-gray-100 shadow-sm p-4 hover:shadow-md transition-shadow";

    match kind {
        CatalogKind::Notes => {
            let href = format!("/notes/{}", item.name);
            view! { <a href=href class=class>{body}</a> }.into_any()
        }
        _ => view! { <div class=class>{body}</div> }.into_any(),
    }
}

/// Brand card with country and parent company
#[component]
pub fn BrandCard(brand: Brand) -> impl IntoView {
    let details: Vec<String> = [brand.country.clone(), brand.parent.clone()]
        .into_iter()
        .flatten()
        .filter(|d| !d.trim().is_empty())
        .collect();
    let total = brand.total_fragrances.unwrap_or(0);

    view! {
        <div class="bg-white rounded-xl border border-gray-100 shadow-sm p-4">
            <div class="flex items-baseline justify-between gap-2">
                <h3 class="font-semibold text-gray-900">{brand.name}</h3>
                <span class="text-xs text-gray-400">{format!("{} fragrances", total)}</span>
            </div>
            <p class="text-sm text-gray-500 mt-1">{details.join(" · ")}</p>
        </div>
    }
}
