use yew::prelude::*;

use crate::services::{load_dashboard, DashboardData};

pub struct UseDashboardHandle {
    pub data: DashboardData,
    pub loading: bool,
}

/// Carga los datos del dashboard al montar y cada vez que cambia el token.
/// Nunca falla: los recursos caídos llegan ya degradados desde el servicio.
#[hook]
pub fn use_dashboard(token: String) -> UseDashboardHandle {
    let data = use_state(DashboardData::default);
    let loading = use_state(|| true);

    {
        let data = data.clone();
        let loading = loading.clone();
        use_effect_with(token, move |tok: &String| {
            let tok = tok.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                data.set(load_dashboard(&tok).await);
                loading.set(false);
            });
            || ()
        });
    }

    UseDashboardHandle {
        data: (*data).clone(),
        loading: *loading,
    }
}
