use serde::{Deserialize, Serialize};

/// Objetivo de ventas. El backend puede añadir campos extra; solo `amount`
/// participa en los cálculos del dashboard.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Target {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// Cliente en seguimiento. El dashboard solo cuenta cuántos hay.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Customer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Reporte agregado de progreso vs objetivos
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Report {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub progress_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_without_amount_defaults_to_zero() {
        let target: Target = serde_json::from_str(r#"{"name":"Q3 EMEA"}"#).unwrap();
        assert_eq!(target.amount, 0.0);
    }

    #[test]
    fn report_tolerates_missing_fields() {
        let report: Report = serde_json::from_str("{}").unwrap();
        assert_eq!(report.currency, None);
        assert_eq!(report.progress_value, 0.0);
    }
}
