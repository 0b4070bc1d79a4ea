use super::*;
use crate::state::test_helpers;

#[test]
fn store_error_maps_not_found() {
    assert_eq!(store_error(UnidadMedidaError::NotFound(3)).status(), StatusCode::NOT_FOUND);
}

#[test]
fn store_error_maps_validation_to_bad_request() {
    assert_eq!(store_error(UnidadMedidaError::DescripcionVacia).status(), StatusCode::BAD_REQUEST);
    assert_eq!(store_error(UnidadMedidaError::DescripcionDemasiadoLarga).status(), StatusCode::BAD_REQUEST);
}

#[test]
fn store_error_maps_database_to_500() {
    let err = store_error(UnidadMedidaError::Database(sqlx::Error::PoolClosed));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.code(), "E_DATABASE");
}

#[tokio::test]
async fn crear_returns_201_with_assigned_fields() {
    let state = test_helpers::test_app_state();
    let body = UnidadMedidaCrear { descripcion: "Kilogram".into() };

    let Ok((status, Json(row))) = crear(State(state.clone()), Json(body)).await else {
        panic!("create should succeed");
    };
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(row.descripcion, "Kilogram");
    assert!(row.activo);

    let Ok(Json(fetched)) = obtener(State(state), Path(row.id)).await else {
        panic!("created row should be readable");
    };
    assert_eq!(fetched, row);
}

#[tokio::test]
async fn crear_blank_descripcion_is_400() {
    let state = test_helpers::test_app_state();
    let Err(err) = crear(State(state), Json(UnidadMedidaCrear { descripcion: " ".into() })).await else {
        panic!("blank description should be rejected");
    };
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.code(), "E_DESCRIPCION_VACIA");
}

#[tokio::test]
async fn obtener_unknown_id_is_404() {
    let state = test_helpers::test_app_state();
    let Err(err) = obtener(State(state), Path(42)).await else {
        panic!("unknown id should be rejected");
    };
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listar_honors_activos_filter() {
    let state = test_helpers::test_app_state();
    let ids = test_helpers::seed_unidades(&state, &["Litro", "Caja", "Docena"]).await;
    let body = UnidadMedidaActualizar { id: ids[1], descripcion: None, activo: Some(false) };
    assert!(actualizar(State(state.clone()), Path(ids[1]), Json(body)).await.is_ok());

    let Ok(Json(todas)) = listar(State(state.clone()), Query(ListarQuery::default())).await else {
        panic!("list should succeed");
    };
    assert_eq!(todas.len(), 3);
    assert_eq!(todas[0].descripcion, "Caja");

    let Ok(Json(activas)) = listar(State(state), Query(ListarQuery { activos: Some(true) })).await else {
        panic!("list should succeed");
    };
    let nombres: Vec<_> = activas.iter().map(|u| u.descripcion.as_str()).collect();
    assert_eq!(nombres, ["Docena", "Litro"]);
}

#[tokio::test]
async fn actualizar_applies_only_supplied_fields() {
    let state = test_helpers::test_app_state();
    let ids = test_helpers::seed_unidades(&state, &["Gramo"]).await;

    let body = UnidadMedidaActualizar { id: ids[0], descripcion: Some("Gramos".into()), activo: None };
    let Ok(Json(row)) = actualizar(State(state), Path(ids[0]), Json(body)).await else {
        panic!("update should succeed");
    };
    assert_eq!(row.descripcion, "Gramos");
    assert!(row.activo);
    assert!(row.fechamodificacion >= row.fechacreacion);
}

#[tokio::test]
async fn actualizar_rejects_mismatched_ids() {
    let state = test_helpers::test_app_state();
    let ids = test_helpers::seed_unidades(&state, &["Gramo"]).await;

    let body = UnidadMedidaActualizar { id: ids[0] + 1, descripcion: None, activo: Some(false) };
    let Err(err) = actualizar(State(state.clone()), Path(ids[0]), Json(body)).await else {
        panic!("mismatched ids should be rejected");
    };
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.code(), "E_ID_MISMATCH");

    let Ok(Json(row)) = obtener(State(state), Path(ids[0])).await else {
        panic!("row should still exist");
    };
    assert!(row.activo);
}

#[tokio::test]
async fn actualizar_unknown_id_is_404() {
    let state = test_helpers::test_app_state();
    let body = UnidadMedidaActualizar { id: 5, descripcion: None, activo: Some(true) };
    let Err(err) = actualizar(State(state), Path(5), Json(body)).await else {
        panic!("unknown id should be rejected");
    };
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}
