use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Structured outcome of one document extraction.
///
/// Serialized with the keys the extraction prompt asks the model for, so a
/// model answer and the HTTP response share one shape. English aliases are
/// accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ExtractionResult {
    #[serde(rename = "OK")]
    Ok(InvoiceData),
    #[serde(rename = "ERROR")]
    Error {
        #[serde(
            rename = "motivo",
            alias = "reason",
            default,
            deserialize_with = "null_as_default"
        )]
        reason: String,
    },
}

impl ExtractionResult {
    pub fn error(reason: impl Into<String>) -> Self {
        Self::Error {
            reason: reason.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Ok(_) => "OK",
            Self::Error { .. } => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceData {
    #[serde(rename = "nombre", alias = "payer", default)]
    pub payer: Option<String>,
    #[serde(rename = "entidad", alias = "issuer", default)]
    pub issuer: Option<String>,
    /// ISO `YYYY-MM-DD`, kept as the model wrote it.
    #[serde(rename = "fecha", alias = "issueDate", default)]
    pub issue_date: Option<String>,
    #[serde(
        rename = "tipoComprobante",
        alias = "documentKind",
        default,
        deserialize_with = "null_as_default"
    )]
    pub document_kind: DocumentKind,
    #[serde(
        rename = "tipo_factura",
        alias = "invoiceClass",
        default,
        deserialize_with = "lenient_invoice_class",
        skip_serializing_if = "Option::is_none"
    )]
    pub invoice_class: Option<InvoiceClass>,
    #[serde(rename = "nro_factura", alias = "documentNumber", default)]
    pub document_number: Option<String>,
    #[serde(
        rename = "items",
        alias = "lineItems",
        default,
        deserialize_with = "null_as_default"
    )]
    pub line_items: Vec<LineItem>,
    #[serde(
        rename = "importe",
        alias = "totalAmount",
        default,
        deserialize_with = "lenient_number"
    )]
    pub total_amount: f64,
}

impl InvoiceData {
    pub fn items_total(&self) -> f64 {
        self.line_items.iter().map(|item| item.amount).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(
        rename = "cantidad",
        alias = "quantity",
        default,
        deserialize_with = "lenient_number"
    )]
    pub quantity: f64,
    #[serde(
        rename = "descripcion",
        alias = "description",
        default,
        deserialize_with = "null_as_default"
    )]
    pub description: String,
    #[serde(
        rename = "importe",
        alias = "amount",
        default,
        deserialize_with = "lenient_number"
    )]
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentKind {
    #[serde(rename = "Factura", alias = "Invoice")]
    Invoice,
    #[serde(rename = "Recibo", alias = "Receipt")]
    Receipt,
    #[serde(rename = "Ticket")]
    Ticket,
    #[default]
    #[serde(rename = "Otros", alias = "Other")]
    Other,
}

/// Argentine fiscal invoice letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceClass {
    A,
    B,
    C,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Empty or unrecognised letters mean the document carries no invoice class.
fn lenient_invoice_class<'de, D>(deserializer: D) -> Result<Option<InvoiceClass>, D::Error>
where
    D: Deserializer<'de>,
{
    let class = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(letter)) => match letter.trim().to_uppercase().as_str() {
            "A" => Some(InvoiceClass::A),
            "B" => Some(InvoiceClass::B),
            "C" => Some(InvoiceClass::C),
            _ => None,
        },
        _ => None,
    };
    Ok(class)
}

/// Accepts JSON numbers and numeric strings (`"1"`, `"1.234,50"`); null is zero.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("number out of range: {number}"))),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            // "1.234,50" and "1234,50" use the comma as decimal separator
            let normalized = match (trimmed.rfind(','), trimmed.rfind('.')) {
                (Some(comma), Some(dot)) if comma > dot => {
                    trimmed.replace('.', "").replace(',', ".")
                }
                (Some(_), None) => trimmed.replace(',', "."),
                _ => trimmed.replace(',', ""),
            };
            normalized
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid number: \"{text}\"")))
        }
        Some(other) => Err(D::Error::custom(format!(
            "invalid type: {other}, expected a number"
        ))),
    }
}
