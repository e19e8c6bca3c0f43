use gate::{GateClient, GateError};
use httpmock::{Method::GET, Method::POST, MockServer};
use serde_json::json;

#[tokio::test]
async fn recognize_sends_embedding_as_json_string() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/rostros/reconocer_rostro/")
                .json_body(json!({"embedding": "[0.5,1.0]", "umbral": 0.5}));
            then.status(200).json_body(json!({
                "reconocido": true,
                "usuario": {"id": 7, "first_name": "Ana", "last_name": "Paredes"},
                "confianza": 0.95
            }));
        })
        .await;

    let client = GateClient::new(server.url(""));
    let reply = client.recognize(&[0.5, 1.0], 0.5).await.unwrap();
    mock.assert_async().await;
    assert!(reply.reconocido);
    let usuario = reply.usuario.unwrap();
    assert_eq!(usuario.id, 7);
    assert_eq!(usuario.display_name(), "Ana Paredes");
    assert!((reply.confianza - 0.95).abs() < 1e-6);
}

#[tokio::test]
async fn recognize_tolerates_null_usuario() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/rostros/reconocer_rostro/");
            then.status(200).json_body(json!({
                "reconocido": false,
                "usuario": null,
                "confianza": 0.0
            }));
        })
        .await;

    let client = GateClient::new(server.url(""));
    let reply = client.recognize(&[0.25], 0.5).await.unwrap();
    assert!(!reply.reconocido);
    assert!(reply.usuario.is_none());
}

#[tokio::test]
async fn decide_access_posts_embedding_and_image() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/rostros/procesar_acceso_automatico/")
                .json_body(json!({
                    "embedding": "[0.25]",
                    "imagen": "data:image/jpeg;base64,AAAA"
                }));
            then.status(200).json_body(json!({
                "acceso_permitido": true,
                "usuario": {"id": 3, "first_name": "Luis", "last_name": "Mamani"},
                "tipo_acceso": "entrada",
                "confianza": 0.875,
                "mensaje": "Bienvenido Luis"
            }));
        })
        .await;

    let client = GateClient::new(server.url(""));
    let reply = client
        .decide_access(&[0.25], "data:image/jpeg;base64,AAAA")
        .await
        .unwrap();
    mock.assert_async().await;
    assert!(reply.acceso_permitido);
    assert_eq!(reply.tipo_acceso.as_deref(), Some("entrada"));
    assert_eq!(reply.mensaje, "Bienvenido Luis");
    assert!((reply.confianza - 0.875).abs() < 1e-6);
}

#[tokio::test]
async fn register_access_posts_event() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/accesos/registrar_acceso/").json_body(json!({
                "usuario_id": 7,
                "tipo_acceso": "salida",
                "confianza": 0.5,
                "imagen": "data:image/jpeg;base64,QQ=="
            }));
            then.status(200).json_body(json!({
                "success": true,
                "registro_id": 42,
                "mensaje": "Acceso de salida registrado exitosamente"
            }));
        })
        .await;

    let client = GateClient::new(server.url(""));
    let reply = client
        .register_access(7, "salida", 0.5, "data:image/jpeg;base64,QQ==")
        .await
        .unwrap();
    mock.assert_async().await;
    assert!(reply.success);
    assert_eq!(reply.registro_id, 42);
}

#[tokio::test]
async fn stats_parses_counters() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rostros/estadisticas/");
            then.status(200).json_body(json!({
                "total_rostros_registrados": 12,
                "total_accesos_registrados": 340,
                "accesos_hoy": 5,
                "ultimos_accesos": [{"id": 1}]
            }));
        })
        .await;

    let client = GateClient::new(server.url(""));
    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total_rostros_registrados, 12);
    assert_eq!(stats.total_accesos_registrados, 340);
    assert_eq!(stats.accesos_hoy, 5);
    assert_eq!(stats.ultimos_accesos.len(), 1);
}

#[tokio::test]
async fn server_errors_surface_as_http() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/rostros/reconocer_rostro/");
            then.status(500).json_body(json!({"error": "interno"}));
        })
        .await;

    let client = GateClient::new(server.url(""));
    let err = client.recognize(&[0.1], 0.5).await.unwrap_err();
    assert!(matches!(err, GateError::Http(_)));
}
