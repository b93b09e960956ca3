use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};

use crate::types::PendingAuth;

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(pending): Extension<Arc<PendingAuth>>,
) -> Html<String> {
    if params.contains_key("error") {
        return Html(String::from("<h4>Authorization was denied.</h4>"));
    }

    let Some(code) = params.get("code") else {
        return Html(String::from("<h4>Missing authorization code.</h4>"));
    };

    if params.get("state") != Some(&pending.state) {
        return Html(String::from(
            "<h4>State mismatch. Restart the authorization flow.</h4>",
        ));
    }

    Html(format!(
        "<h2>Almost there.</h2>\
         <p>Copy the code below and paste it into the terminal:</p>\
         <p><code>{}</code></p>\
         <p>You can close this window afterwards.</p>",
        escape_html(code)
    ))
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
