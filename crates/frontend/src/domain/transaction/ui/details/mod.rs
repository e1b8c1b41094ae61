use chrono::NaiveDate;
use contracts::domain::transaction::{CreateTransactionData, Transaction};
use contracts::enums::TransactionType;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::transaction::api;
use crate::shared::components::ui::button::Button;
use crate::shared::date_utils::today_iso;

/// Entry form for a new ledger record.
///
/// Collects only the caller-supplied fields; the service assigns the id and
/// the running balance.
#[component]
pub fn AddTransactionForm(
    /// Invoked with the created record after a successful save
    on_created: Callback<Transaction>,
    /// Invoked when the form is dismissed without saving
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (transaction_type, set_transaction_type) = signal(TransactionType::Expense);
    let (amount, set_amount) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (subcategory, set_subcategory) = signal(String::new());
    let (date, set_date) = signal(today_iso());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let parsed_amount = match amount.get().trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                set_error_message.set(Some("Amount must be a number".to_string()));
                return;
            }
        };

        let parsed_date = match NaiveDate::parse_from_str(date.get().trim(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                set_error_message.set(Some("Date must be in YYYY-MM-DD format".to_string()));
                return;
            }
        };

        let sub = subcategory.get().trim().to_string();
        let data = CreateTransactionData {
            transaction_type: transaction_type.get(),
            amount: parsed_amount,
            category: category.get().trim().to_string(),
            subcategory: if sub.is_empty() { None } else { Some(sub) },
            date: parsed_date,
        };

        if let Err(e) = data.validate() {
            set_error_message.set(Some(e));
            return;
        }

        set_is_saving.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::create_transaction(data).await {
                Ok(created) => {
                    set_is_saving.set(false);
                    on_created.run(created);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Failed to save transaction: {}", e)));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="transaction-form">
            <h2>"New transaction"</h2>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="tx-type">"Type"</label>
                    <select
                        id="tx-type"
                        on:change=move |ev| {
                            if let Ok(t) = TransactionType::from_code(&event_target_value(&ev)) {
                                set_transaction_type.set(t);
                            }
                        }
                    >
                        {TransactionType::all().into_iter().map(|t| view! {
                            <option value=t.code() selected=move || transaction_type.get() == t>
                                {t.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="tx-amount">"Amount"</label>
                    <input
                        type="number"
                        id="tx-amount"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="tx-category">"Category"</label>
                    <input
                        type="text"
                        id="tx-category"
                        placeholder="Food, Rent, Salary..."
                        value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="tx-subcategory">"Subcategory (optional)"</label>
                    <input
                        type="text"
                        id="tx-subcategory"
                        value=move || subcategory.get()
                        on:input=move |ev| set_subcategory.set(event_target_value(&ev))
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="tx-date">"Date"</label>
                    <input
                        type="date"
                        id="tx-date"
                        value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-actions">
                    <Button button_type="submit".to_string() disabled=is_saving>
                        {move || if is_saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                    <Button
                        variant="ghost".to_string()
                        on_click=Callback::new(move |_| on_cancel.run(()))
                    >
                        "Cancel"
                    </Button>
                </div>
            </form>
        </div>
    }
}
