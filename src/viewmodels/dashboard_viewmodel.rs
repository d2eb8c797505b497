// ============================================================================
// DASHBOARD VIEWMODEL - Valores derivados para las tarjetas de resumen
// ============================================================================
// Cálculo puro sobre DashboardData. Se recalcula en cada render; nunca se
// parchea un valor anterior.
// ============================================================================

use crate::services::DashboardData;
use crate::utils::constants::DEFAULT_CURRENCY;
use crate::utils::format::format_currency;

#[derive(Clone, PartialEq, Debug)]
pub struct DashboardViewModel {
    pub total_target: f64,
    pub pipeline_value: f64,
    pub currency: String,
    pub active_customers: usize,
}

impl DashboardViewModel {
    pub fn derive(data: &DashboardData) -> Self {
        let total_target = data.targets.iter().map(|t| t.amount).sum();

        let (pipeline_value, currency) = match &data.report {
            Some(report) => (
                report.progress_value,
                report
                    .currency
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            ),
            None => (0.0, DEFAULT_CURRENCY.to_string()),
        };

        Self {
            total_target,
            pipeline_value,
            currency,
            active_customers: data.customers.len(),
        }
    }

    pub fn total_target_display(&self) -> String {
        format_currency(self.total_target, &self.currency)
    }

    pub fn pipeline_display(&self) -> String {
        format_currency(self.pipeline_value, &self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Report, Target};
    use crate::services::DashboardData;

    fn target(amount: f64) -> Target {
        Target {
            amount,
            ..Default::default()
        }
    }

    #[test]
    fn total_target_sums_amounts_including_defaults() {
        let data = DashboardData {
            targets: vec![target(100.0), target(50.0), Target::default()],
            ..Default::default()
        };

        let vm = DashboardViewModel::derive(&data);
        assert_eq!(vm.total_target, 150.0);
    }

    #[test]
    fn report_drives_pipeline_value_and_currency() {
        let data = DashboardData {
            report: Some(Report {
                currency: Some("EUR".to_string()),
                progress_value: 4200.0,
            }),
            ..Default::default()
        };

        let vm = DashboardViewModel::derive(&data);
        assert_eq!(vm.pipeline_value, 4200.0);
        assert_eq!(vm.currency, "EUR");
        assert_eq!(vm.pipeline_display(), "EUR 4,200.00");
    }

    #[test]
    fn missing_report_defaults_to_zero_usd() {
        let vm = DashboardViewModel::derive(&DashboardData::default());
        assert_eq!(vm.pipeline_value, 0.0);
        assert_eq!(vm.currency, "USD");
    }

    #[test]
    fn report_without_currency_falls_back_to_usd() {
        let data = DashboardData {
            report: Some(Report {
                currency: None,
                progress_value: 10.0,
            }),
            ..Default::default()
        };
        assert_eq!(DashboardViewModel::derive(&data).currency, "USD");
    }

    #[test]
    fn active_customers_is_the_list_length() {
        let data = DashboardData {
            customers: vec![Default::default(), Default::default(), Default::default()],
            ..Default::default()
        };
        assert_eq!(DashboardViewModel::derive(&data).active_customers, 3);
    }
}
