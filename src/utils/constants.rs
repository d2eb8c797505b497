/// Clave única de localStorage para el token de acceso
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "access_token";

/// Moneda por defecto cuando el reporte no está disponible
pub const DEFAULT_CURRENCY: &str = "USD";
