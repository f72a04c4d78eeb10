//! Sample page templates for testing and demonstration.
//!
//! Each template is plain Handlebars-flavoured HTML; the field mappings
//! that fill them live with the tests and callers that use them.

/// Simple invoice-style page with addresses and a line-item table.
pub fn invoice_page() -> &'static str {
    r##"
<h1 style="color: #1a365d">Invoice {{number}}</h1>

<div style="display: flex; justify-content: space-between">
    <div>
        <p><strong>From:</strong></p>
        <p>{{issuer.name}}</p>
        <p>{{issuer.address}}</p>
    </div>
    <div>
        <p><strong>To:</strong></p>
        <p>{{customer.name}}</p>
        <p>{{customer.address}}</p>
    </div>
</div>

<table style="width: 100%">
    <tr>
        <th style="text-align: left">Item</th>
        <th style="text-align: left">Qty</th>
        <th style="text-align: left">Price</th>
    </tr>
    {{#each items}}
    <tr>
        <td>{{this.description}}</td>
        <td>{{this.quantity}}</td>
        <td>{{this.price}}</td>
    </tr>
    {{/each}}
</table>

<p style="text-align: right"><strong>Total: {{total}}</strong></p>
"##
}

/// Certificate page with a centred recipient block.
pub fn certificate_page() -> &'static str {
    r##"
<div style="text-align: center; padding-top: 30mm">
    <h1>Certificate of Completion</h1>
    <p>This certifies that</p>
    <h2>{{recipient}}</h2>
    <p>has successfully completed</p>
    <h3>{{course}}</h3>
    <p>{{date}}</p>
    <p><em>{{signatory}}</em></p>
</div>
"##
}

/// Minimal page for unit testing.
pub fn minimal_page() -> &'static str {
    r#"<p>{{body}}</p>"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_page;
    use crate::report::Report;
    use serde_json::json;

    #[test]
    fn sample_templates_render_against_their_mappings() {
        let samples = vec![
            (
                invoice_page(),
                json!({
                    "number": "2024-001",
                    "issuer": {"name": "Acme Corp", "address": "123 Business St"},
                    "customer": {"name": "Client Inc", "address": "456 Client Ave"},
                    "items": [
                        {"description": "Web Development", "quantity": 40, "price": "$150.00"},
                        {"description": "Design Services", "quantity": 20, "price": "$125.00"},
                    ],
                    "total": "$8,500.00",
                }),
            ),
            (
                certificate_page(),
                json!({
                    "recipient": "Jane Doe",
                    "course": "Advanced Print Layout",
                    "date": "2026-02-01",
                    "signatory": "Course Director",
                }),
            ),
            (minimal_page(), json!({"body": "Body text"})),
        ];

        for (template, fields) in samples {
            let mut report = Report::new();
            report.add_page(template, fields).unwrap();
            let html = render_page(&report.pages()[0], 10).unwrap();
            assert!(html.contains("sheet"), "fragment should be a sheet: {html}");
        }
    }
}
