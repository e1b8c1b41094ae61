mod state;

use contracts::domain::transaction::{Transaction, TransactionId};
use contracts::enums::{FilterPeriod, TransactionType};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::transaction::api;
use crate::domain::transaction::ui::details::AddTransactionForm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::button::Button;
use crate::shared::date_utils::{format_date, today};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, Sortable};
use crate::shared::number_format::format_money;
use crate::system::auth::guard::RequireAuth;
use state::create_state;

const SEARCH_DEBOUNCE_MS: u32 = 300;

impl Sortable for Transaction {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "amount" => self
                .amount
                .partial_cmp(&other.amount)
                .unwrap_or(std::cmp::Ordering::Equal),
            "category" => self
                .category
                .to_lowercase()
                .cmp(&other.category.to_lowercase()),
            "type" => self.transaction_type.code().cmp(other.transaction_type.code()),
            "balance" => self
                .balance
                .partial_cmp(&other.balance)
                .unwrap_or(std::cmp::Ordering::Equal),
            _ => self.date.cmp(&other.date),
        }
    }
}

fn type_icon(t: TransactionType) -> &'static str {
    match t {
        TransactionType::Expense => "trending-down",
        TransactionType::Income => "trending-up",
        TransactionType::Saving => "piggy-bank",
        TransactionType::Investment => "bar-chart",
    }
}

/// Ledger page behind the auth guard.
#[component]
pub fn TransactionsListPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <TransactionsList />
        </RequireAuth>
    }
}

#[component]
fn TransactionsList() -> impl IntoView {
    let state = create_state();
    let all_items: RwSignal<Vec<Transaction>> = RwSignal::new(Vec::new());
    let balance = RwSignal::new(0.0_f64);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_add_form, set_show_add_form) = signal(false);
    let search_generation = RwSignal::new(0_u32);

    // Re-derive the visible rows from the full data set and the current
    // filter/sort settings.
    let refresh_view = move || {
        let (period, query) =
            state.with_untracked(|s| (s.period, s.search_query.trim().to_lowercase()));

        let mut data = all_items.get_untracked();
        if let Some(start) = period.start_date(today()) {
            data.retain(|t| t.date >= start);
        }
        if !query.is_empty() {
            data.retain(|t| {
                t.category.to_lowercase().contains(&query)
                    || t.subcategory
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&query)
            });
        }

        state.update(|s| {
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            s.items = data;
        });
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_transactions().await {
                Ok(response) => {
                    all_items.set(response.transactions);
                    balance.set(response.balance);
                    state.update(|s| s.is_loaded = true);
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load transactions: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let set_period = move |period: FilterPeriod| {
        state.update(|s| s.period = period);
        refresh_view();
    };

    // Debounced: only the latest pending edit refreshes the view.
    let on_search_input = move |value: String| {
        state.update(|s| s.search_query = value);
        let generation = search_generation.get_untracked().wrapping_add(1);
        search_generation.set(generation);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if search_generation.get_untracked() == generation {
                refresh_view();
            }
        });
    };

    let sort_by = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
        });
        refresh_view();
    };

    let delete_item = move |id: TransactionId| {
        spawn_local(async move {
            match api::delete_transaction(id).await {
                Ok(()) => load_data(),
                Err(e) => set_error.set(Some(format!("Failed to delete transaction: {}", e))),
            }
        });
    };

    // Per-type totals over the visible rows.
    let total_for = move |t: TransactionType| {
        state.with(|s| {
            s.items
                .iter()
                .filter(|x| x.transaction_type == t)
                .map(|x| x.amount)
                .sum::<f64>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Transactions" subtitle="Your personal ledger".to_string()>
                <Button on_click=Callback::new(move |_| set_show_add_form.set(true))>
                    {icon("plus")}
                    " Add transaction"
                </Button>
            </PageHeader>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="stat-row">
                <StatCard label="Balance" icon_name="wallet" value=balance />
                <StatCard
                    label="Income"
                    icon_name="trending-up"
                    accent="income"
                    value=Signal::derive(move || total_for(TransactionType::Income))
                />
                <StatCard
                    label="Expenses"
                    icon_name="trending-down"
                    accent="expense"
                    value=Signal::derive(move || total_for(TransactionType::Expense))
                />
                <StatCard
                    label="Savings"
                    icon_name="piggy-bank"
                    accent="saving"
                    value=Signal::derive(move || total_for(TransactionType::Saving))
                />
                <StatCard
                    label="Investments"
                    icon_name="bar-chart"
                    accent="investment"
                    value=Signal::derive(move || total_for(TransactionType::Investment))
                />
            </div>

            <div class="list-toolbar">
                <div class="list-toolbar__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search by category"
                        value=move || state.with(|s| s.search_query.clone())
                        on:input=move |ev| on_search_input(event_target_value(&ev))
                    />
                </div>

                <div class="list-toolbar__periods">
                    {FilterPeriod::all().into_iter().map(|period| {
                        let is_active = move || state.with(|s| s.period == period);
                        view! {
                            <button
                                class=move || if is_active() { "period-chip period-chip--active" } else { "period-chip" }
                                on:click=move |_| set_period(period)
                            >
                                {period.display_name()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <Show when=move || show_add_form.get()>
                <AddTransactionForm
                    on_created=Callback::new(move |_tx: Transaction| {
                        set_show_add_form.set(false);
                        load_data();
                    })
                    on_cancel=Callback::new(move |_| set_show_add_form.set(false))
                />
            </Show>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th class="sortable" on:click=move |_| sort_by("date")>
                            "Date"
                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "date", s.sort_ascending))}
                        </th>
                        <th class="sortable" on:click=move |_| sort_by("type")>
                            "Type"
                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "type", s.sort_ascending))}
                        </th>
                        <th class="sortable" on:click=move |_| sort_by("category")>
                            "Category"
                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "category", s.sort_ascending))}
                        </th>
                        <th class="sortable data-table__num" on:click=move |_| sort_by("amount")>
                            "Amount"
                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "amount", s.sort_ascending))}
                        </th>
                        <th class="sortable data-table__num" on:click=move |_| sort_by("balance")>
                            "Balance"
                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "balance", s.sort_ascending))}
                        </th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=|t| t.id
                        children=move |t: Transaction| {
                            let id = t.id;
                            let type_code = t.transaction_type.code();
                            let type_name = t.transaction_type.display_name();
                            let type_icon_name = type_icon(t.transaction_type);
                            let subcategory = t.subcategory.clone();

                            view! {
                                <tr>
                                    <td>{format_date(t.date)}</td>
                                    <td>
                                        <span class=format!("type-badge type-badge--{}", type_code)>
                                            {icon(type_icon_name)}
                                            {type_name}
                                        </span>
                                    </td>
                                    <td>
                                        {t.category.clone()}
                                        {subcategory.map(|s| view! {
                                            <span class="data-table__subcategory">{format!(" / {}", s)}</span>
                                        })}
                                    </td>
                                    <td class="data-table__num">{format_money(t.signed_amount())}</td>
                                    <td class="data-table__num">{format_money(t.balance)}</td>
                                    <td>
                                        <button
                                            class="icon-btn"
                                            title="Delete"
                                            on:click=move |_| delete_item(id)
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || !loading.get() && state.with(|s| s.is_loaded && s.items.is_empty())>
                <div class="empty-state">"No transactions for the selected period."</div>
            </Show>
        </div>
    }
}
