//! Admin page for the server-side tool store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists, creates, flags, and deletes `ToolRecord`s through the REST API.
//! These records are edited independently of the compiled-in catalog; the
//! registry and dispatcher never read them.
//!
//! ERROR HANDLING
//! ==============
//! Validation runs client-side first so most mistakes never reach the
//! server. Request failures land in `AdminState::error` and as error toasts.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_meta::Title;
use uuid::Uuid;

use catalog::{Catalog, ToolPatch, ToolRecord};

use crate::state::admin::{AdminDraft, AdminState};
use crate::state::notices::{NoticeState, ToastKind};

/// Record flag toggled from the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordFlag {
    Featured,
    New,
}

/// Patch that sets `flag` to `value` and touches nothing else.
pub fn flag_patch(flag: RecordFlag, value: bool) -> ToolPatch {
    match flag {
        RecordFlag::Featured => ToolPatch { featured: Some(value), ..ToolPatch::default() },
        RecordFlag::New => ToolPatch { is_new: Some(value), ..ToolPatch::default() },
    }
}

/// Display name for a record's category; unknown ids are shown verbatim.
pub fn category_label(catalog: &Catalog, category_id: &str) -> String {
    catalog
        .category(category_id)
        .map_or_else(|| category_id.to_owned(), |c| c.name.to_owned())
}

fn report_error(admin: RwSignal<AdminState>, notices: RwSignal<NoticeState>, message: String) {
    #[cfg(feature = "hydrate")]
    log::warn!("admin request failed: {message}");
    notices.update(|n| {
        n.push(ToastKind::Error, "Admin", message.clone());
    });
    admin.update(|a| {
        a.loading = false;
        a.error = Some(message);
    });
}

fn reload(admin: RwSignal<AdminState>, notices: RwSignal<NoticeState>) {
    admin.update(|a| a.loading = true);
    leptos::task::spawn_local(async move {
        match crate::net::api::list_tools().await {
            Ok(records) => admin.update(|a| a.replace_all(records)),
            Err(message) => report_error(admin, notices, message),
        }
    });
}

fn set_flag(admin: RwSignal<AdminState>, notices: RwSignal<NoticeState>, id: Uuid, flag: RecordFlag, value: bool) {
    let patch = flag_patch(flag, value);
    leptos::task::spawn_local(async move {
        match crate::net::api::update_tool(id, &patch).await {
            Ok(record) => admin.update(|a| a.upsert(record)),
            Err(message) => report_error(admin, notices, message),
        }
    });
}

fn delete(admin: RwSignal<AdminState>, notices: RwSignal<NoticeState>, record: ToolRecord) {
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_tool(record.id).await {
            Ok(()) => {
                admin.update(|a| a.remove(record.id));
                notices.update(|n| {
                    n.push(ToastKind::Success, "Deleted", format!("{} was removed.", record.name));
                });
            }
            Err(message) => report_error(admin, notices, message),
        }
    });
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let draft = RwSignal::new(AdminDraft::default());
    let saving = RwSignal::new(false);

    // Effects only run in the browser; the first run loads the table.
    Effect::new(move || {
        if admin.with_untracked(|a| a.loaded || a.loading) {
            return;
        }
        reload(admin, notices);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let record = match draft.with_untracked(|d| d.to_new_record(&catalog)) {
            Ok(record) => record,
            Err(message) => {
                admin.update(|a| a.error = Some(message));
                return;
            }
        };
        saving.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::create_tool(&record).await {
                Ok(created) => {
                    notices.update(|n| {
                        n.push(ToastKind::Success, "Created", format!("{} was added.", created.name));
                    });
                    admin.update(|a| {
                        a.upsert(created);
                        a.error = None;
                    });
                    draft.set(AdminDraft::default());
                }
                Err(message) => report_error(admin, notices, message),
            }
            saving.set(false);
        });
    };

    let row = move |record: ToolRecord| {
        let id = record.id;
        let featured = record.featured;
        let is_new = record.is_new;
        let name = record.name.clone();
        let description = record.description.clone();
        let category = category_label(&catalog, &record.category_id);
        let url = if record.url.is_empty() { "none".to_owned() } else { record.url.clone() };
        view! {
            <tr>
                <td class="admin-table__name">
                    <strong>{name}</strong>
                    <span class="admin-table__description">{description}</span>
                </td>
                <td>{category}</td>
                <td><code>{url}</code></td>
                <td>
                    <input
                        type="checkbox"
                        aria-label="Featured"
                        prop:checked=featured
                        on:change=move |_| set_flag(admin, notices, id, RecordFlag::Featured, !featured)
                    />
                </td>
                <td>
                    <input
                        type="checkbox"
                        aria-label="New"
                        prop:checked=is_new
                        on:change=move |_| set_flag(admin, notices, id, RecordFlag::New, !is_new)
                    />
                </td>
                <td>
                    <button class="btn btn--danger btn--small" on:click=move |_| delete(admin, notices, record.clone())>
                        "Delete"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <Title text="Admin · Toolbox"/>
        <section class="admin-page">
            <h1>"Manage tools"</h1>

            <form class="admin-form" on:submit=on_submit>
                <h2>"Add a tool"</h2>
                <label>
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        rows="2"
                        prop:value=move || draft.get().description
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Category"
                    <select
                        prop:value=move || draft.get().category_id
                        on:change=move |ev| draft.update(|d| d.category_id = event_target_value(&ev))
                    >
                        {catalog
                            .categories()
                            .iter()
                            .map(|c| view! { <option value=c.id>{c.name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label>
                    "URL"
                    <input
                        type="text"
                        placeholder="/tools/my-tool"
                        prop:value=move || draft.get().url
                        on:input=move |ev| draft.update(|d| d.url = event_target_value(&ev))
                    />
                </label>
                <label class="admin-form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().featured
                        on:change=move |_| draft.update(|d| d.featured = !d.featured)
                    />
                    "Featured"
                </label>
                <label class="admin-form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().is_new
                        on:change=move |_| draft.update(|d| d.is_new = !d.is_new)
                    />
                    "New"
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving…" } else { "Add tool" }}
                </button>
            </form>

            <Show when=move || admin.with(|a| a.error.is_some())>
                <p class="admin-page__error">{move || admin.get().error.unwrap_or_default()}</p>
            </Show>

            <div class="admin-page__toolbar">
                <span>{move || format!("{} records", admin.with(|a| a.records.len()))}</span>
                <button class="btn btn--small" disabled=move || admin.get().loading on:click=move |_| reload(admin, notices)>
                    "Refresh"
                </button>
            </div>

            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"URL"</th>
                        <th>"Featured"</th>
                        <th>"New"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || admin.get().records key=|record| (record.id, record.featured, record.is_new) children=row/>
                </tbody>
            </table>
            <Show when=move || admin.with(|a| a.loaded && a.records.is_empty())>
                <p class="admin-page__empty">"No tools stored yet."</p>
            </Show>
        </section>
    }
}
