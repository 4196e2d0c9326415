//! Server-rendered views for the charge screens.
//!
//! Three documents: the search form (`charge_search_condition`), the search
//! result listing (`charge_search_result`) and the combined add/edit form
//! (`charge_edit`). Rendering is plain string building with HTML escaping;
//! the functions are the template contract seam and are unit-tested.

use charge_app::domain::charges::models::{Charge, ChargeSearchCondition};

use crate::charges::form::{ChargeForm, FieldError};

/// Escape text for safe interpolation into HTML.
fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}

fn flash_message(message: Option<&str>) -> String {
    match message {
        Some(message) => format!("<p class=\"message\">{}</p>\n", escape(message)),
        None => String::new(),
    }
}

fn field_errors(errors: &[FieldError], field: &str) -> String {
    errors
        .iter()
        .filter(|error| error.field == field)
        .map(|error| format!("<span class=\"field-error\">{}</span>\n", escape(error.message)))
        .collect()
}

/// The empty search form.
pub(crate) fn charge_search_condition(message: Option<&str>) -> String {
    let body = format!(
        "{flash}<h1>料金検索</h1>\n\
         <form method=\"post\" action=\"/charge/search\">\n\
         <label>名前 <input type=\"text\" name=\"name\" value=\"\"></label>\n\
         <button type=\"submit\">検索</button>\n\
         </form>\n\
         <p><a href=\"/charge/add\">料金を追加する</a></p>\n",
        flash = flash_message(message),
    );

    layout("料金検索", &body)
}

/// The search result listing.
pub(crate) fn charge_search_result(
    condition: &ChargeSearchCondition,
    result: &[Charge],
) -> String {
    let mut rows = String::new();

    for charge in result {
        let end_date = charge
            .end_date
            .map(|date| date.to_string())
            .unwrap_or_default();

        rows.push_str(&format!(
            "<tr><td><a href=\"/charge/edit/{id}\">{id}</a></td>\
             <td>{name}</td><td>{amount}</td><td>{start}</td><td>{end}</td>\
             <td><a href=\"/charge/delete/{id}\">削除</a></td></tr>\n",
            id = charge.charge_id,
            name = escape(&charge.name),
            amount = charge.amount,
            start = charge.start_date,
            end = end_date,
        ));
    }

    let body = format!(
        "<h1>料金検索結果</h1>\n\
         <p>検索条件: 名前「{name}」</p>\n\
         <table>\n\
         <tr><th>料金ID</th><th>名前</th><th>金額</th>\
         <th>開始日</th><th>終了日</th><th></th></tr>\n\
         {rows}</table>\n\
         <p><a href=\"/charge/search\">検索条件に戻る</a></p>\n",
        name = escape(condition.name.as_deref().unwrap_or("")),
    );

    layout("料金検索結果", &body)
}

/// The combined add/edit form. Renders the submitted (not persisted) values
/// together with any field errors.
pub(crate) fn charge_edit(
    form: &ChargeForm,
    errors: &[FieldError],
    message: Option<&str>,
) -> String {
    let body = format!(
        "{flash}<h1>料金編集</h1>\n\
         <form method=\"post\" action=\"/charge/save\">\n\
         <input type=\"hidden\" name=\"charge_id\" value=\"{charge_id}\">\n\
         {charge_id_errors}\
         <label>名前 <input type=\"text\" name=\"name\" value=\"{name}\"></label>\n\
         {name_errors}\
         <label>金額 <input type=\"text\" name=\"amount\" value=\"{amount}\"></label>\n\
         {amount_errors}\
         <label>開始日 <input type=\"text\" name=\"start_date\" value=\"{start_date}\" placeholder=\"yyyy-MM-dd\"></label>\n\
         {start_date_errors}\
         <label>終了日 <input type=\"text\" name=\"end_date\" value=\"{end_date}\" placeholder=\"yyyy-MM-dd\"></label>\n\
         {end_date_errors}\
         <button type=\"submit\">保存</button>\n\
         </form>\n\
         <p><a href=\"/charge/search\">検索条件に戻る</a></p>\n",
        flash = flash_message(message),
        charge_id = escape(&form.charge_id),
        charge_id_errors = field_errors(errors, "charge_id"),
        name = escape(&form.name),
        name_errors = field_errors(errors, "name"),
        amount = escape(&form.amount),
        amount_errors = field_errors(errors, "amount"),
        start_date = escape(&form.start_date),
        start_date_errors = field_errors(errors, "start_date"),
        end_date = escape(&form.end_date),
        end_date_errors = field_errors(errors, "end_date"),
    );

    layout("料金編集", &body)
}
