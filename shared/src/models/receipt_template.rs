//! Receipt Template Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Global rendering parameters of a receipt template
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GlobalStyle {
    /// Paper width in millimetres (58 / 80); some editors store "58mm"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<Value>,
    /// Keys the bridge understands but we don't
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One block of a receipt (header, items table, totals, footer...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateComponent {
    /// String or number, depending on the editor that saved it
    pub id: Value,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub styles: Value,
}

fn default_true() -> bool {
    true
}

/// Template layout: global style + components
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TemplateStyle {
    #[serde(default)]
    pub global: GlobalStyle,
    #[serde(default)]
    pub components: Vec<TemplateComponent>,
}

/// Receipt template entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptTemplate {
    pub id: i64,
    pub name: String,
    /// Active flag; at most one template of the collection carries it
    #[serde(default)]
    pub is_used: bool,
    #[serde(default)]
    pub style: TemplateStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ReceiptTemplate {
    /// Enabled components in render order
    pub fn active_components(&self) -> Vec<&TemplateComponent> {
        let mut components: Vec<_> = self
            .style
            .components
            .iter()
            .filter(|c| c.enabled)
            .collect();
        components.sort_by_key(|c| c.order);
        components
    }

    /// Copy of the template carrying only the enabled components, sorted
    pub fn prepared(&self) -> Self {
        let components = self.active_components().into_iter().cloned().collect();
        Self {
            style: TemplateStyle {
                global: self.style.global.clone(),
                components,
            },
            ..self.clone()
        }
    }

    /// First entry of a raw collection flagged `is_used`
    ///
    /// Works on undecoded entries so one malformed inactive template cannot
    /// hide the active one.
    pub fn select_active(entries: &[Value]) -> Option<&Value> {
        entries
            .iter()
            .find(|entry| entry.get("is_used").and_then(Value::as_bool) == Some(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template_json() -> Value {
        json!({
            "id": 3,
            "name": "H-58C default",
            "is_used": true,
            "style": {
                "global": { "width": 58, "font_family": "monospace", "paper_cut": true },
                "components": [
                    { "id": "footer", "type": "text", "order": 9, "enabled": true, "data": { "text": "Спасибо!" } },
                    { "id": "logo", "type": "image", "order": 0, "enabled": false },
                    { "id": "header", "type": "header", "order": 1, "enabled": true },
                    { "id": "items", "type": "items_table", "order": 5 }
                ]
            }
        })
    }

    #[test]
    fn test_active_components_filtered_and_sorted() {
        let template: ReceiptTemplate = serde_json::from_value(template_json()).unwrap();
        let ids: Vec<_> = template
            .active_components()
            .iter()
            .filter_map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["header", "items", "footer"]);
    }

    #[test]
    fn test_prepared_keeps_global_style() {
        let template: ReceiptTemplate = serde_json::from_value(template_json()).unwrap();
        let prepared = template.prepared();

        assert_eq!(prepared.id, 3);
        assert_eq!(prepared.style.components.len(), 3);
        assert_eq!(prepared.style.global.width, Some(json!(58)));
        assert_eq!(prepared.style.global.extra.get("paper_cut"), Some(&json!(true)));
        // source untouched
        assert_eq!(template.style.components.len(), 4);
    }

    #[test]
    fn test_select_active_takes_first_match() {
        let entries = vec![
            json!({ "id": 1, "name": "old", "is_used": false }),
            json!({ "id": 2, "name": "main", "is_used": true }),
            json!({ "id": 4, "name": "duplicate", "is_used": true }),
        ];

        let active = ReceiptTemplate::select_active(&entries).unwrap();
        assert_eq!(active["id"], 2);
    }

    #[test]
    fn test_select_active_none() {
        let entries = vec![
            json!({ "id": 1, "name": "old", "is_used": false }),
            json!({ "id": 5, "name": "flag as text", "is_used": "true" }),
        ];
        assert!(ReceiptTemplate::select_active(&entries).is_none());
    }

    #[test]
    fn test_loose_style_values_decode() {
        let template: ReceiptTemplate = serde_json::from_value(json!({
            "id": 7,
            "name": "legacy",
            "is_used": true,
            "style": {
                "global": { "width": "58mm", "font_size": "12px", "line_spacing": 1.2 },
                "components": [{ "id": 5, "type": "text", "order": 0 }]
            }
        }))
        .unwrap();

        assert_eq!(template.style.global.font_size, Some(json!("12px")));
        assert_eq!(template.active_components()[0].id, json!(5));
    }
}
