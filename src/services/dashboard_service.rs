// ============================================================================
// DASHBOARD SERVICE - Carga concurrente de los datos del dashboard
// ============================================================================
// Tres requests en paralelo; se combina solo cuando los tres terminaron.
// Degradación suave: un recurso malformado o caído se sustituye por su valor
// vacío en lugar de tumbar la carga completa. load_dashboard nunca devuelve
// error.
// ============================================================================

use gloo_net::http::Request;
use serde_json::Value;

use crate::config::CONFIG;
use crate::models::{Customer, Report, Target};
use crate::services::error::ApiError;

/// Datos agregados de un ciclo de carga. Se reemplazan al completo en cada
/// fetch; no hay merge incremental.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DashboardData {
    pub targets: Vec<Target>,
    pub customers: Vec<Customer>,
    pub report: Option<Report>,
}

impl DashboardData {
    /// Combina las tres respuestas una vez que todas han terminado.
    ///
    /// El recurso que falló (red o forma inesperada) se degrada a lista
    /// vacía / reporte ausente; los demás se conservan tal cual.
    pub fn from_responses(
        targets: Result<Value, ApiError>,
        customers: Result<Value, ApiError>,
        report: Result<Value, ApiError>,
    ) -> Self {
        Self {
            targets: entries_from(targets, "targets"),
            customers: entries_from(customers, "customers"),
            report: report_from(report),
        }
    }
}

/// Carga objetivos, clientes y reporte con el token dado.
///
/// Los tres requests se disparan a la vez y se espera a que los tres
/// terminen antes de combinar nada.
pub async fn load_dashboard(token: &str) -> DashboardData {
    log::info!("📊 Cargando datos del dashboard...");

    let (targets, customers, report) = futures::join!(
        fetch_json(token, "/targets"),
        fetch_json(token, "/customers"),
        fetch_json(token, "/reports/targets-vs-progress"),
    );

    let data = DashboardData::from_responses(targets, customers, report);
    log::info!(
        "✅ Dashboard cargado: {} objetivos, {} clientes, reporte: {}",
        data.targets.len(),
        data.customers.len(),
        if data.report.is_some() { "sí" } else { "no" }
    );
    data
}

/// GET autenticado que devuelve el cuerpo como JSON genérico
async fn fetch_json(token: &str, path: &str) -> Result<Value, ApiError> {
    let url = format!("{}{}", CONFIG.backend_url(), path);

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::Transport(format!("HTTP {}", response.status())));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Transport(format!("Parse error: {}", e)))
}

/// Lista de entradas desde un cuerpo que debería ser un array JSON.
/// Una entrada individual ilegible se degrada a su valor por defecto
/// (amount 0, campos vacíos) en lugar de descartar la lista.
fn entries_from<T>(result: Result<Value, ApiError>, resource: &str) -> Vec<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    match result {
        Ok(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        Ok(_) => {
            log::warn!("⚠️ Respuesta de {} no es una lista, usando lista vacía", resource);
            Vec::new()
        }
        Err(e) => {
            log::warn!("⚠️ Error cargando {}: {}", resource, e);
            Vec::new()
        }
    }
}

/// Reporte desde un cuerpo que debería ser un objeto JSON
fn report_from(result: Result<Value, ApiError>) -> Option<Report> {
    match result {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        Ok(_) => {
            log::warn!("⚠️ Respuesta del reporte no es un objeto, se omite");
            None
        }
        Err(e) => {
            log::warn!("⚠️ Error cargando reporte: {}", e);
            None
        }
    }
}
