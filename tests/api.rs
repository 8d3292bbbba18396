mod common;

use actix_web::http::{StatusCode, header};
use actix_web::test;
use common::{ADMIN, CAJA1, CAJA2, session_cookie, setup};
use serde_json::{Value, json};

#[actix_web::test]
async fn test_login_sets_session_cookie() {
    let state = setup().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/mbl/login")
        .set_json(json!({ "username": "admin", "password": "admin123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "mbl_session")
        .map(|c| c.into_owned())
        .expect("session cookie");
    assert_eq!(cookie.http_only(), Some(true));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["username"], "admin");
    assert_eq!(body["data"]["role"], "admin");

    let req = test::TestRequest::get()
        .uri("/api/mbl/me")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["username"], "admin");
}

#[actix_web::test]
async fn test_login_rejects_bad_credentials() {
    let state = setup().await;
    let app = init_app!(state);

    let wrong_password = test::TestRequest::post()
        .uri("/api/mbl/login")
        .set_json(json!({ "username": "admin", "password": "nope" }))
        .to_request();
    let resp = test::call_service(&app, wrong_password).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let wrong_password_body: Value = test::read_body_json(resp).await;

    let unknown_user = test::TestRequest::post()
        .uri("/api/mbl/login")
        .set_json(json!({ "username": "ghost", "password": "admin123" }))
        .to_request();
    let resp = test::call_service(&app, unknown_user).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let unknown_user_body: Value = test::read_body_json(resp).await;

    // same answer for both, so usernames stay hidden
    assert_eq!(wrong_password_body["message"], unknown_user_body["message"]);
    assert_eq!(unknown_user_body["success"], false);

    let missing = test::TestRequest::post()
        .uri("/api/mbl/login")
        .set_json(json!({ "username": "admin" }))
        .to_request();
    let resp = test::call_service(&app, missing).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_api_requires_session() {
    let state = setup().await;
    let app = init_app!(state);

    for uri in ["/api/mbl/clientes", "/api/mbl/canjes", "/api/mbl/analytics/kpis"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "AUTH_ERROR");
    }

    let forged = test::TestRequest::get()
        .uri("/api/mbl/clientes")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, forged).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_bearer_token_authenticates() {
    let state = setup().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/mbl/login")
        .set_json(json!({ "username": "caja1", "password": "caja1234" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let token = resp
        .response()
        .cookies()
        .find(|c| c.name() == "mbl_session")
        .map(|c| c.value().to_string())
        .expect("session cookie");

    let req = test::TestRequest::get()
        .uri("/api/mbl/clientes")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/mbl/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["username"], "caja1");
}

#[actix_web::test]
async fn test_cookie_wins_over_bearer_header() {
    let state = setup().await;
    let app = init_app!(state);
    let admin = session_cookie(&state, ADMIN).await;
    let caja1 = session_cookie(&state, CAJA1).await;

    let req = test::TestRequest::get()
        .uri("/api/mbl/me")
        .cookie(caja1)
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", admin.value())))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["username"], "caja1");
    assert_eq!(body["data"]["role"], "operator");
}

#[actix_web::test]
async fn test_logout_revokes_session() {
    let state = setup().await;
    let app = init_app!(state);
    let cookie = session_cookie(&state, CAJA1).await;

    let req = test::TestRequest::post()
        .uri("/api/mbl/logout")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let removal = resp
        .response()
        .cookies()
        .find(|c| c.name() == "mbl_session")
        .expect("removal cookie");
    assert_eq!(removal.value(), "");

    let req = test::TestRequest::get()
        .uri("/api/mbl/clientes")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_admin_stats_role_guard() {
    let state = setup().await;
    let app = init_app!(state);

    let operator = session_cookie(&state, CAJA1).await;
    let req = test::TestRequest::get()
        .uri("/api/mbl/admin/stats")
        .cookie(operator)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let admin = session_cookie(&state, ADMIN).await;
    let req = test::TestRequest::get()
        .uri("/api/mbl/admin/stats")
        .cookie(admin)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["stats"]["total_clientes"], 0);
    assert_eq!(body["stats"]["total_canjes"], 0);
    assert_eq!(body["stats"]["total_monto"], 0.0);
    assert_eq!(body["stats"]["total_operadores"], 2);
}

#[actix_web::test]
async fn test_duplicate_national_id_conflicts() {
    let state = setup().await;
    let app = init_app!(state);
    let caja1 = session_cookie(&state, CAJA1).await;
    let caja2 = session_cookie(&state, CAJA2).await;

    let req = test::TestRequest::post()
        .uri("/api/mbl/clientes")
        .cookie(caja1)
        .set_json(json!({ "nombre": "Ana Gómez", "cedula": "1.023.456.789", "telefono": "300 123 4567" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["cliente"]["cedula"], "1023456789");
    assert_eq!(body["cliente"]["telefono"], "3001234567");
    assert_eq!(body["cliente"]["puntos"], 0);

    // another operator, same person written differently
    let req = test::TestRequest::post()
        .uri("/api/mbl/clientes")
        .cookie(caja2)
        .set_json(json!({ "nombre": "Ana G.", "cedula": "1023456789" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_national_id_rejects_non_ascii_digits() {
    let state = setup().await;
    let app = init_app!(state);
    let caja1 = session_cookie(&state, CAJA1).await;

    let req = test::TestRequest::post()
        .uri("/api/mbl/clientes")
        .cookie(caja1.clone())
        .set_json(json!({ "nombre": "Carlos Ruiz", "cedula": "12345678" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    for cedula in ["１２３４５６７８", "١٢٣٤٥٦٧٨"] {
        let req = test::TestRequest::post()
            .uri("/api/mbl/clientes")
            .cookie(caja1.clone())
            .set_json(json!({ "nombre": "Carlos Ruiz", "cedula": cedula }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{cedula}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    let req = test::TestRequest::get()
        .uri("/api/mbl/clientes")
        .cookie(caja1)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["clientes"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_bad_path_ids_use_error_envelope() {
    let state = setup().await;
    let app = init_app!(state);
    let admin = session_cookie(&state, ADMIN).await;

    let requests = [
        test::TestRequest::get().uri("/api/mbl/clientes/abc"),
        test::TestRequest::delete().uri("/api/mbl/canjes/99999999999"),
        test::TestRequest::get().uri("/api/mbl/clientes/-/premios"),
    ];
    for req in requests {
        let resp = test::call_service(&app, req.cookie(admin.clone()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["message"], "Identificador inválido");
    }
}

#[actix_web::test]
async fn test_client_validation() {
    let state = setup().await;
    let app = init_app!(state);
    let caja1 = session_cookie(&state, CAJA1).await;

    for payload in [
        json!({ "cedula": "1023456789" }),
        json!({ "nombre": "Sin cédula" }),
        json!({ "nombre": "Mal", "cedula": "12ab" }),
        json!({ "nombre": "Mal", "cedula": "1023456789", "email": "no-es-correo" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/mbl/clientes")
            .cookie(caja1.clone())
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{payload}");
    }

    let malformed = test::TestRequest::post()
        .uri("/api/mbl/clientes")
        .cookie(caja1)
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, malformed).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_update_client_keeps_national_id() {
    let state = setup().await;
    let app = init_app!(state);
    let caja1 = session_cookie(&state, CAJA1).await;

    let req = test::TestRequest::post()
        .uri("/api/mbl/clientes")
        .cookie(caja1.clone())
        .set_json(json!({ "nombre": "Luis", "cedula": "80123456" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["cliente"]["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/mbl/clientes/{id}"))
        .cookie(caja1.clone())
        .set_json(json!({ "cedula": "80999999" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri(&format!("/api/mbl/clientes/{id}"))
        .cookie(caja1.clone())
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri(&format!("/api/mbl/clientes/{id}"))
        .cookie(caja1)
        .set_json(json!({ "nombre": "Luis Pérez", "email": "LUIS@Example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["cliente"]["nombre"], "Luis Pérez");
    assert_eq!(body["cliente"]["email"], "luis@example.com");
    assert_eq!(body["cliente"]["cedula"], "80123456");
}

#[actix_web::test]
async fn test_operators_only_see_their_clients() {
    let state = setup().await;
    let app = init_app!(state);
    let caja1 = session_cookie(&state, CAJA1).await;
    let caja2 = session_cookie(&state, CAJA2).await;
    let admin = session_cookie(&state, ADMIN).await;

    let req = test::TestRequest::post()
        .uri("/api/mbl/clientes")
        .cookie(caja1)
        .set_json(json!({ "nombre": "Marta", "cedula": "52111222" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["cliente"]["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri("/api/mbl/clientes")
        .cookie(caja2.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["clientes"].as_array().unwrap().len(), 0);

    let req = test::TestRequest::get()
        .uri(&format!("/api/mbl/clientes/{id}"))
        .cookie(caja2)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/mbl/clientes")
        .cookie(admin)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["clientes"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_redemption_requires_visible_client() {
    let state = setup().await;
    let app = init_app!(state);
    let caja1 = session_cookie(&state, CAJA1).await;
    let caja2 = session_cookie(&state, CAJA2).await;

    let req = test::TestRequest::post()
        .uri("/api/mbl/clientes")
        .cookie(caja1.clone())
        .set_json(json!({ "nombre": "Pedro", "cedula": "71222333" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let client_id = body["cliente"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/mbl/canjes")
        .cookie(caja2)
        .set_json(json!({ "cliente_id": client_id, "monto": 50000 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/mbl/canjes")
        .cookie(caja1.clone())
        .set_json(json!({ "cliente_id": 9999, "monto": 50000 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    for monto in [json!(0), json!(-10), json!("abc"), Value::Null] {
        let req = test::TestRequest::post()
            .uri("/api/mbl/canjes")
            .cookie(caja1.clone())
            .set_json(json!({ "cliente_id": client_id, "monto": monto }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{monto}");
    }

    // form values arrive as strings
    let req = test::TestRequest::post()
        .uri("/api/mbl/canjes")
        .cookie(caja1.clone())
        .set_json(json!({ "cliente_id": client_id.to_string(), "monto": "50000.50", "descripcion": "Bono" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["canje"]["monto"], 50000.5);
    assert_eq!(body["canje"]["cliente_nombre"], "Pedro");
    assert_eq!(body["canje"]["usuario_registro"], "caja1");

    let req = test::TestRequest::get()
        .uri("/api/mbl/canjes")
        .cookie(caja1)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let canjes = body["canjes"].as_array().unwrap();
    assert_eq!(canjes.len(), 1);
    assert_eq!(canjes[0]["cliente_cedula"], "71222333");
    assert_eq!(canjes[0]["descripcion"], "Bono");
}

#[actix_web::test]
async fn test_delete_redemption_ownership() {
    let state = setup().await;
    let app = init_app!(state);
    let caja1 = session_cookie(&state, CAJA1).await;
    let caja2 = session_cookie(&state, CAJA2).await;
    let admin = session_cookie(&state, ADMIN).await;

    let req = test::TestRequest::post()
        .uri("/api/mbl/clientes")
        .cookie(caja1.clone())
        .set_json(json!({ "nombre": "Rosa", "cedula": "39444555" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let client_id = body["cliente"]["id"].as_i64().unwrap();

    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/mbl/canjes")
            .cookie(caja1.clone())
            .set_json(json!({ "cliente_id": client_id, "monto": 1000 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(body["canje"]["id"].as_i64().unwrap());
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/api/mbl/canjes/{}", ids[0]))
        .cookie(caja2)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/mbl/canjes/{}", ids[0]))
        .cookie(caja1)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/mbl/canjes/{}", ids[1]))
        .cookie(admin)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_deleting_client_cascades_redemptions() {
    let state = setup().await;
    let app = init_app!(state);
    let caja1 = session_cookie(&state, CAJA1).await;
    let admin = session_cookie(&state, ADMIN).await;

    let req = test::TestRequest::post()
        .uri("/api/mbl/clientes")
        .cookie(caja1.clone())
        .set_json(json!({ "nombre": "Jorge", "cedula": "10203040" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let client_id = body["cliente"]["id"].as_i64().unwrap();

    for monto in [20000, 35000] {
        let req = test::TestRequest::post()
            .uri("/api/mbl/canjes")
            .cookie(caja1.clone())
            .set_json(json!({ "cliente_id": client_id, "monto": monto }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/mbl/admin/stats")
        .cookie(admin.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["stats"]["total_canjes"], 2);
    assert_eq!(body["stats"]["total_monto"], 55000.0);
    assert_eq!(body["stats"]["canjes_hoy"], 2);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/mbl/clientes/{client_id}"))
        .cookie(caja1.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/mbl/canjes")
        .cookie(admin.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["canjes"].as_array().unwrap().len(), 0);

    let req = test::TestRequest::get()
        .uri("/api/mbl/admin/stats")
        .cookie(admin)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["stats"]["total_clientes"], 0);
    assert_eq!(body["stats"]["total_canjes"], 0);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/mbl/clientes/{client_id}"))
        .cookie(caja1)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_points_and_reachable_prizes() {
    let state = setup().await;
    let app = init_app!(state);
    let caja1 = session_cookie(&state, CAJA1).await;

    let req = test::TestRequest::get()
        .uri("/api/mbl/premios")
        .cookie(caja1.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let premios = body["premios"].as_array().unwrap();
    assert_eq!(premios.len(), 7);
    assert_eq!(premios[0]["nombre"], "Gaseosa");
    assert_eq!(premios[6]["nombre"], "Camiseta Oficial");

    let req = test::TestRequest::post()
        .uri("/api/mbl/clientes")
        .cookie(caja1.clone())
        .set_json(json!({ "nombre": "Sofía", "cedula": "1098765432" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["cliente"]["id"].as_i64().unwrap();

    for puntos in [json!(0), json!(-5), json!(2.5)] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/mbl/clientes/{id}/puntos"))
            .cookie(caja1.clone())
            .set_json(json!({ "puntos": puntos }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{puntos}");
    }

    for puntos in [json!(150), json!("100")] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/mbl/clientes/{id}/puntos"))
            .cookie(caja1.clone())
            .set_json(json!({ "puntos": puntos }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/mbl/clientes/{id}/premios"))
        .cookie(caja1)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["puntos"], 250);
    let names: Vec<&str> = body["premios"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["nombre"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Gaseosa", "Llavero", "Cerveza"]);
}

#[actix_web::test]
async fn test_pages() {
    let state = setup().await;
    let app = init_app!(state);

    for uri in ["/", "/mbl"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND, "{uri}");
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
    }

    let req = test::TestRequest::get().uri("/login").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = session_cookie(&state, ADMIN).await;
    let req = test::TestRequest::get().uri("/").cookie(cookie.clone()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("Polo Deportivo"));

    let req = test::TestRequest::get().uri("/mbl").cookie(cookie).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["database"], "up");
}
