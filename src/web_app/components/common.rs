// web_app/components/common.rs - Reusable UI components
//
// Small, stateless building blocks shared by every catalog page.
// They receive all data via props and report back through callbacks.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-rose-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Shown when the catalog API could not be reached or answered badly.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Could not load the catalog"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Placeholder for a filter combination that matched nothing
#[component]
pub fn EmptyState(
    /// What was being listed, e.g. "fragrances"
    what: &'static str,
    /// Offered when filters are active
    #[prop(optional)]
    on_clear: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="text-center py-16 bg-white rounded-xl border border-dashed border-gray-300">
            <p class="text-lg text-gray-600 mb-4">{format!("No {} match your filters", what)}</p>
            {on_clear.map(|clear| view! {
                <SecondaryButton on_click=clear>"Clear all filters"</SecondaryButton>
            })}
        </div>
    }
}

/// Primary button component
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-rose-600 text-white rounded-lg hover:bg-rose-700 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type="button"
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Caption of the load-more button
pub fn load_more_label(is_loading: bool, remaining: usize) -> String {
    if is_loading {
        "Loading...".to_string()
    } else {
        format!("Load more ({} left)", remaining)
    }
}

/// "Load more" control under an incremental grid
///
/// Hidden once everything is displayed; disabled while a load is pending.
#[component]
pub fn LoadMoreButton(
    has_more: Memo<bool>,
    is_loading: Memo<bool>,
    /// Items not yet displayed
    #[prop(into)]
    remaining: Signal<usize>,
    on_load_more: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || has_more.get()>
            <div class="flex justify-center mt-8">
                <Button
                    on_click=on_load_more
                    disabled=Signal::derive(move || is_loading.get())
                    class="min-w-48"
                >
                    {move || load_more_label(is_loading.get(), remaining.get())}
                </Button>
            </div>
        </Show>
    }
}

/// Modal wrapper component
///
/// Provides modal backdrop styling. The open/close logic is handled by
/// the parent using Show.
#[component]
pub fn ModalWrapper(
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    #[prop(into, default = String::new())]
    title: String,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-gray-900/60 backdrop-blur-sm transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-2xl shadow-2xl w-full max-w-2xl max-h-[90vh] flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100 bg-gray-50/50">
                    <h2 class="text-xl font-bold text-gray-800">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-full p-2 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                </div>

                <div class="p-6 overflow-y-auto">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Tailwind classes for a badge color
pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "rose" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-rose-100 text-rose-800 border border-rose-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "amber" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-amber-100 text-amber-800 border border-amber-200",
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

/// Badge component
///
/// A small tag for accords, notes and facet labels.
#[component]
pub fn Badge(
    children: Children,
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

/// Search box bound to a raw (not yet debounced) text signal
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    /// Called on every keystroke
    on_input: Callback<String>,
    #[prop(default = "Search...")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            type="search"
            placeholder=placeholder
            class="w-full px-4 py-2 border border-gray-300 rounded-lg \
                   focus:ring-2 focus:ring-rose-500 focus:border-transparent \
                   outline-none transition-shadow shadow-sm"
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Select dropdown over string values
///
/// `options` are (value, label) pairs; `on_change` receives the value.
#[component]
pub fn SelectString(
    #[prop(into)]
    selected: Signal<String>,
    options: Vec<(String, String)>,
    on_change: Callback<String>,
) -> impl IntoView {
    let class = "px-4 py-2 border border-gray-300 rounded-lg bg-white \
                 focus:ring-2 focus:ring-rose-500 focus:border-transparent \
                 outline-none cursor-pointer shadow-sm";

    view! {
        <select
            class=class
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {options.into_iter().map(|(opt_value, label)| {
                let opt_val = opt_value.clone();
                view! {
                    <option
                        value=opt_value
                        selected=move || selected.get() == opt_val
                    >
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_more_label() {
        assert_eq!(load_more_label(true, 40), "Loading...");
        assert_eq!(load_more_label(false, 40), "Load more (40 left)");
    }

    #[test]
    fn test_badge_variants() {
        assert!(badge_class("rose").contains("bg-rose-100"));
        assert!(badge_class("amber").contains("bg-amber-100"));
        assert!(badge_class("unknown").contains("bg-gray-100"));
        for variant in ["rose", "red", "amber", "green", "gray"] {
            let class = badge_class(variant);
            assert!(class.contains("rounded-full"), "Rounded for {}", variant);
            assert!(class.contains("text-xs"), "Text size for {}", variant);
        }
    }
}
