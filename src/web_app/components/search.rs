// web_app/components/search.rs - Search and facet UI components
//
// These components handle the filter interface including:
// - SearchBar: text input with search mode toggle and advanced panel
// - AdvancedSearchPanel / TermPicker: include/exclude accords and notes
// - GenderFacet, YearFacet, YearSortDropdown: fragrance facets
// - ItemSortDropdown, BrandFacets: flat list controls
// - PositionFacet: note-position facet of the note page

use leptos::prelude::*;

use crate::web_app::components::common::{Badge, SearchInput, SelectString};
use crate::web_app::filters::{available_accords, available_notes, SearchField};
use crate::web_app::hooks::{use_advanced_search, UseAdvancedSearch, UseBrandFilter, UseFragranceFilter};
use crate::web_app::model::{
    Fragrance, GenderCounts, GenderFilter, ItemSort, NoteLayer, NotePosition, NoteStatistics,
    SearchMode, YearRange, YearSort,
};

/// Fragrance search bar: free text in regular mode, the advanced panel
/// in the other two
///
/// Returns nothing to the caller; every change lands in `filter`.
#[component]
pub fn SearchBar(
    filter: UseFragranceFilter,
    /// Loaded collection, used for the accord and note dropdowns
    #[prop(into)]
    fragrances: Signal<Vec<Fragrance>>,
) -> impl IntoView {
    let advanced = use_advanced_search(Callback::new(move |data| {
        filter.set_advanced_search_data(data);
    }));

    // Clearing the filter as a whole also empties the panel
    Effect::new(move |_| {
        let cleared = filter.criteria.with(|c| c.advanced.mode == SearchMode::Regular && c.advanced.is_empty());
        if cleared && advanced.state.with_untracked(|b| b.mode() != SearchMode::Regular) {
            advanced.reset();
        }
    });

    let mode = Signal::derive(move || advanced.mode());

    view! {
        <div class="w-full space-y-4">
            <SearchModeToggle
                mode=mode
                on_change=Callback::new(move |m| { advanced.set_mode(m); })
            />

            <Show
                when=move || mode.get() == SearchMode::Regular
                fallback=move || view! { <AdvancedSearchPanel advanced=advanced fragrances=fragrances /> }
            >
                <div class="relative">
                    <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                        <span class="text-gray-400">"🔍"</span>
                    </div>
                    <input
                        type="search"
                        placeholder="Search by name, brand, accord or note..."
                        class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                               focus:ring-4 focus:ring-rose-100 focus:border-rose-500 \
                               outline-none text-lg transition-all shadow-sm"
                        prop:value=move || filter.search_query().get()
                        on:input=move |ev| filter.set_search_query(event_target_value(&ev))
                    />
                </div>
            </Show>
        </div>
    }
}

/// Search mode toggle (Regular/Layered/Uncategorized)
#[component]
pub fn SearchModeToggle(
    #[prop(into)]
    mode: Signal<SearchMode>,
    on_change: Callback<SearchMode>,
) -> impl IntoView {
    let modes = [
        (SearchMode::Regular, "Name, brand, accords and notes"),
        (SearchMode::Layered, "Accords plus top, middle and base notes"),
        (SearchMode::Uncategorized, "Accords plus unsorted notes"),
    ];

    view! {
        <div class="flex flex-wrap gap-4">
            {modes.into_iter().map(|(mode_value, description)| {
                let is_selected = move || mode.get() == mode_value;
                view! {
                    <label class="flex items-center gap-3 cursor-pointer group" title=description>
                        <input
                            type="radio"
                            name="search_mode"
                            checked=is_selected
                            on:change=move |_| on_change.run(mode_value)
                            class="peer sr-only"
                        />
                        <div class="w-4 h-4 border-2 border-gray-300 rounded-full peer-checked:border-rose-600 \
                                    peer-checked:border-[5px] transition-all bg-white"></div>
                        <span class=move || {
                            if is_selected() {
                                "text-rose-700 font-bold"
                            } else {
                                "text-gray-700 font-medium group-hover:text-gray-900"
                            }
                        }>
                            {mode_value.to_string()}
                        </span>
                    </label>
                }
            }).collect_view()}
        </div>
    }
}

/// Include/exclude pickers for the fields the current mode searches
#[component]
pub fn AdvancedSearchPanel(
    advanced: UseAdvancedSearch,
    #[prop(into)]
    fragrances: Signal<Vec<Fragrance>>,
) -> impl IntoView {
    let accords = Memo::new(move |_| fragrances.with(|all| available_accords(all)));

    view! {
        <div class="bg-gray-50 p-4 rounded-xl border border-gray-100 space-y-4">
            <TermPicker advanced=advanced field=SearchField::Accords options=accords />
            {move || {
                advanced.mode().layers().iter().map(|layer| {
                    let layer = *layer;
                    let options = Memo::new(move |_| fragrances.with(|all| available_notes(all, layer)));
                    view! {
                        <TermPicker advanced=advanced field=SearchField::Notes(layer) options=options />
                    }
                }).collect_view()
            }}
        </div>
    }
}

fn field_label(field: SearchField) -> String {
    match field {
        SearchField::Accords => "Accords".to_string(),
        SearchField::Notes(layer) => format!("{} notes", layer),
    }
}

/// One field of the advanced panel: chips plus a filterable dropdown
#[component]
pub fn TermPicker(
    advanced: UseAdvancedSearch,
    field: SearchField,
    options: Memo<Vec<String>>,
) -> impl IntoView {
    let included = move || {
        advanced.state.with(|b| match field {
            SearchField::Accords => b.query().accords.clone(),
            SearchField::Notes(layer) => b.query().notes.get(layer).to_vec(),
        })
    };
    let excluded = move || {
        advanced.state.with(|b| match field {
            SearchField::Accords => b.query().excluded_accords.clone(),
            SearchField::Notes(layer) => b.query().excluded_notes.get(layer).to_vec(),
        })
    };
    let include = move |term: &str| match field {
        SearchField::Accords => advanced.add_accord(term),
        SearchField::Notes(layer) => advanced.add_note(layer, term),
    };
    let exclude = move |term: &str| match field {
        SearchField::Accords => advanced.exclude_accord(term),
        SearchField::Notes(layer) => advanced.exclude_note(layer, term),
    };
    let remove = move |term: &str| match field {
        SearchField::Accords => advanced.remove_accord(term),
        SearchField::Notes(layer) => advanced.remove_note(layer, term),
    };
    let remove_excluded = move |term: &str| match field {
        SearchField::Accords => advanced.remove_excluded_accord(term),
        SearchField::Notes(layer) => advanced.remove_excluded_note(layer, term),
    };

    let is_open = move || advanced.state.with(|b| b.open_dropdown() == Some(field));
    let suggestions = move || {
        options.with(|opts| {
            advanced.state.with(|b| {
                b.suggestions(field, opts)
                    .into_iter()
                    .take(50)
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <div class="space-y-2">
            <div class="flex items-center justify-between">
                <span class="text-xs font-semibold text-gray-500 uppercase tracking-wider">
                    {field_label(field)}
                </span>
                <button
                    type="button"
                    class="text-sm text-rose-600 hover:text-rose-800"
                    on:click=move |_| advanced.toggle_dropdown(field)
                >
                    {move || if is_open() { "Done" } else { "+ Add" }}
                </button>
            </div>

            <div class="flex flex-wrap gap-2">
                <For each=included key=|term| term.clone() children=move |term| {
                    let label = term.clone();
                    view! {
                        <button type="button" on:click=move |_| { remove(&term); }>
                            <Badge variant="rose">{label}" ×"</Badge>
                        </button>
                    }
                } />
                <For each=excluded key=|term| term.clone() children=move |term| {
                    let label = format!("not {}", term);
                    view! {
                        <button type="button" on:click=move |_| { remove_excluded(&term); }>
                            <Badge variant="red">{label}" ×"</Badge>
                        </button>
                    }
                } />
            </div>

            <Show when=is_open>
                <div class="bg-white border border-gray-200 rounded-lg shadow-lg p-2">
                    <input
                        type="text"
                        placeholder="Filter..."
                        class="w-full px-3 py-1.5 mb-2 border border-gray-200 rounded outline-none focus:border-rose-400"
                        prop:value=move || advanced.state.with(|b| b.filter_text(field).to_string())
                        on:input=move |ev| advanced.set_filter_text(field, &event_target_value(&ev))
                    />
                    <ul class="max-h-60 overflow-y-auto divide-y divide-gray-50">
                        <For each=suggestions key=|term| term.clone() children=move |term| {
                            let to_include = term.clone();
                            let to_exclude = term.clone();
                            view! {
                                <li class="flex items-center justify-between px-2 py-1 text-sm">
                                    <span class="text-gray-700">{term}</span>
                                    <span class="flex gap-1">
                                        <button
                                            type="button"
                                            class="px-2 rounded bg-green-50 text-green-700 hover:bg-green-100"
                                            title="Include"
                                            on:click=move |_| { include(&to_include); }
                                        >"+"</button>
                                        <button
                                            type="button"
                                            class="px-2 rounded bg-red-50 text-red-700 hover:bg-red-100"
                                            title="Exclude"
                                            on:click=move |_| { exclude(&to_exclude); }
                                        >"−"</button>
                                    </span>
                                </li>
                            }
                        } />
                    </ul>
                </div>
            </Show>
        </div>
    }
}

/// Gender facet with per-gender totals
#[component]
pub fn GenderFacet(
    #[prop(into)]
    selected: Signal<GenderFilter>,
    counts: Memo<GenderCounts>,
    on_change: Callback<GenderFilter>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {GenderFilter::ALL.into_iter().map(|gender| {
                let class = move || {
                    if selected.get() == gender {
                        "px-3 py-1.5 rounded-full text-sm font-semibold bg-rose-600 text-white shadow-sm"
                    } else {
                        "px-3 py-1.5 rounded-full text-sm font-medium bg-white text-gray-700 border border-gray-200 hover:border-rose-300"
                    }
                };
                view! {
                    <button type="button" class=class on:click=move |_| on_change.run(gender)>
                        {gender.to_string()}
                        <span class="ml-1.5 opacity-70">{move || counts.get().get(gender)}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Parse a year input; blank or malformed text yields `None`
pub fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

/// Release-year window with inputs bounded by the catalog's years
#[component]
pub fn YearFacet(
    #[prop(into)]
    range: Signal<Option<YearRange>>,
    bounds: Memo<YearRange>,
    on_change: Callback<Option<YearRange>>,
) -> impl IntoView {
    let current = move || range.get().unwrap_or_else(|| bounds.get());

    let set_min = move |raw: String| {
        if let Some(min) = parse_year(&raw) {
            on_change.run(Some(YearRange::new(min, current().max)));
        }
    };
    let set_max = move |raw: String| {
        if let Some(max) = parse_year(&raw) {
            on_change.run(Some(YearRange::new(current().min, max)));
        }
    };

    let input_class = "w-24 px-2 py-1.5 border border-gray-300 rounded-lg outline-none focus:border-rose-400";

    view! {
        <div class="flex items-center gap-2 text-sm">
            <span class="text-gray-600 font-medium">"Year"</span>
            <input
                type="number"
                class=input_class
                min=move || bounds.get().min
                max=move || bounds.get().max
                prop:value=move || current().min.to_string()
                on:change=move |ev| set_min(event_target_value(&ev))
            />
            <span class="text-gray-400">"to"</span>
            <input
                type="number"
                class=input_class
                min=move || bounds.get().min
                max=move || bounds.get().max
                prop:value=move || current().max.to_string()
                on:change=move |ev| set_max(event_target_value(&ev))
            />
            <Show when=move || range.get().is_some()>
                <button
                    type="button"
                    class="text-gray-500 hover:text-gray-800"
                    on:click=move |_| on_change.run(None)
                >
                    "Any"
                </button>
            </Show>
        </div>
    }
}

/// Sort by release year
#[component]
pub fn YearSortDropdown(
    #[prop(into)]
    sort: Signal<YearSort>,
    on_change: Callback<YearSort>,
) -> impl IntoView {
    let options = YearSort::ALL
        .into_iter()
        .map(|s| (s.as_str().to_string(), s.to_string()))
        .collect();

    view! {
        <SelectString
            selected=Signal::derive(move || sort.get().as_str().to_string())
            options=options
            on_change=Callback::new(move |raw: String| {
                if let Ok(parsed) = raw.parse::<YearSort>() {
                    on_change.run(parsed);
                }
            })
        />
    }
}

/// Sort of a flat list, restricted to `options`
#[component]
pub fn ItemSortDropdown(
    #[prop(into)]
    sort: Signal<ItemSort>,
    options: Vec<ItemSort>,
    on_change: Callback<ItemSort>,
) -> impl IntoView {
    let options = options
        .into_iter()
        .map(|s| (s.as_str().to_string(), s.to_string()))
        .collect();

    view! {
        <SelectString
            selected=Signal::derive(move || sort.get().as_str().to_string())
            options=options
            on_change=Callback::new(move |raw: String| {
                if let Ok(parsed) = raw.parse::<ItemSort>() {
                    on_change.run(parsed);
                }
            })
        />
    }
}

/// Note-position facet, each option labelled with its statistics
#[component]
pub fn PositionFacet(
    #[prop(into)]
    selected: Signal<NotePosition>,
    statistics: Memo<NoteStatistics>,
    on_change: Callback<NotePosition>,
) -> impl IntoView {
    let count = move |position: NotePosition| {
        let stats = statistics.get();
        match position.layer() {
            Some(layer) => stats.get(layer),
            None => stats.total,
        }
    };

    view! {
        <div class="flex flex-wrap gap-2">
            {NotePosition::ALL.into_iter().map(|position| {
                let class = move || {
                    if selected.get() == position {
                        "px-3 py-1.5 rounded-lg text-sm font-semibold bg-amber-500 text-white"
                    } else {
                        "px-3 py-1.5 rounded-lg text-sm font-medium bg-white text-gray-700 border border-gray-200 hover:border-amber-300"
                    }
                };
                view! {
                    <button type="button" class=class on:click=move |_| on_change.run(position)>
                        {position.to_string()}
                        <span class="ml-1.5 opacity-70">{move || count(position)}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Country and parent-company selects of the brand list
#[component]
pub fn BrandFacets(filter: UseBrandFilter) -> impl IntoView {
    let facet_options = |values: Vec<String>, any: &str| {
        std::iter::once((String::new(), any.to_string()))
            .chain(values.into_iter().map(|v| (v.clone(), v)))
            .collect::<Vec<_>>()
    };
    let none_if_blank = |raw: String| if raw.is_empty() { None } else { Some(raw) };

    view! {
        <div class="flex flex-wrap gap-3">
            {move || view! {
                <SelectString
                    selected=Signal::derive(move || filter.criteria.with(|c| c.country.clone().unwrap_or_default()))
                    options=facet_options(filter.unique_countries.get(), "All countries")
                    on_change=Callback::new(move |raw: String| filter.set_country(none_if_blank(raw)))
                />
            }}
            {move || view! {
                <SelectString
                    selected=Signal::derive(move || filter.criteria.with(|c| c.parent.clone().unwrap_or_default()))
                    options=facet_options(filter.unique_parents.get(), "All parent companies")
                    on_change=Callback::new(move |raw: String| filter.set_parent(none_if_blank(raw)))
                />
            }}
        </div>
    }
}

/// Search box for the flat item and brand lists
#[component]
pub fn ListSearch(
    value: RwSignal<String>,
    on_input: Callback<String>,
    #[prop(default = "Search by name...")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex-1 min-w-64">
            <SearchInput value=value on_input=on_input placeholder=placeholder />
        </div>
    }
}
