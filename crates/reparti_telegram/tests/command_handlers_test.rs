//! Command handler behaviour against the in-memory store.

mod test_helpers;

use std::sync::Arc;

use reparti_database::{DepartmentStore, MemoryDepartmentStore};
use reparti_telegram::{ReplyFormat, UpdateRouter, replies};
use test_helpers::*;

fn router(store: &Arc<MemoryDepartmentStore>) -> UpdateRouter {
    UpdateRouter::new(store.clone())
}

#[tokio::test]
async fn admin_creates_department() {
    let store = Arc::new(MemoryDepartmentStore::new());
    let platform = RecordingPlatform::with_admins(&[ADMIN_ID]);

    router(&store)
        .route(&platform, &command(group_meta(ADMIN_ID, 10), "/crea_reparto @AERO", None))
        .await;

    let sent = platform.replies().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, "Reparto @aero creato con successo!");
    assert_eq!(sent[0].message_id, 10);
    assert_eq!(sent[0].format, ReplyFormat::Plain);
    assert_eq!(store.list_departments(GROUP_CHAT).await.unwrap(), vec!["@aero"]);
}

#[tokio::test]
async fn creating_twice_replies_success_and_keeps_one_row() {
    let store = Arc::new(MemoryDepartmentStore::new());
    let platform = RecordingPlatform::with_admins(&[ADMIN_ID]);
    let router = router(&store);

    for id in [1, 2] {
        router
            .route(&platform, &command(group_meta(ADMIN_ID, id), "/crea_reparto @aero", None))
            .await;
    }

    assert_eq!(
        platform.texts().await,
        vec![replies::department_created("@aero"), replies::department_created("@aero")]
    );
    assert_eq!(store.department_count().await, 1);
}

#[tokio::test]
async fn non_admin_cannot_create_department() {
    let store = Arc::new(MemoryDepartmentStore::new());
    let platform = RecordingPlatform::with_admins(&[ADMIN_ID]);

    router(&store)
        .route(&platform, &command(group_meta(OTHER_ID, 1), "/crea_reparto @naval", None))
        .await;

    let texts = platform.texts().await;
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("solo dagli admin"));
    assert_eq!(store.department_count().await, 0);
}

#[tokio::test]
async fn private_chat_is_always_authorized() {
    let store = Arc::new(MemoryDepartmentStore::new());
    let platform = RecordingPlatform::failing_admin_lookup();

    router(&store)
        .route(&platform, &command(private_meta(OTHER_ID, 1), "/crea_reparto @aero", None))
        .await;

    assert_eq!(platform.texts().await, vec![replies::department_created("@aero")]);
}

#[tokio::test]
async fn failed_admin_lookup_asks_to_promote_bot_then_denies() {
    let store = Arc::new(MemoryDepartmentStore::new());
    let platform = RecordingPlatform::failing_admin_lookup();

    router(&store)
        .route(&platform, &command(group_meta(ADMIN_ID, 1), "/crea_reparto @aero", None))
        .await;

    assert_eq!(
        platform.texts().await,
        vec![replies::CANNOT_VERIFY_PERMISSIONS, replies::ADMIN_ONLY]
    );
    assert_eq!(store.department_count().await, 0);
}

#[tokio::test]
async fn create_requires_argument_and_tag_marker() {
    let store = Arc::new(MemoryDepartmentStore::new());
    let platform = RecordingPlatform::with_admins(&[ADMIN_ID]);
    let router = router(&store);

    router
        .route(&platform, &command(group_meta(ADMIN_ID, 1), "/crea_reparto", None))
        .await;
    router
        .route(&platform, &command(group_meta(ADMIN_ID, 2), "/crea_reparto aero", None))
        .await;

    assert_eq!(
        platform.texts().await,
        vec![
            "Uso: /crea_reparto @nome_reparto".to_string(),
            replies::malformed_department(),
        ]
    );
    assert_eq!(store.department_count().await, 0);
}

#[tokio::test]
async fn add_member_needs_a_reply_target() {
    let store = Arc::new(MemoryDepartmentStore::new());
    store.create_department(GROUP_CHAT, "@aero").await.unwrap();
    let platform = RecordingPlatform::with_admins(&[ADMIN_ID]);

    router(&store)
        .route(&platform, &command(group_meta(ADMIN_ID, 1), "/aggiungi_membro @aero", None))
        .await;

    assert_eq!(
        platform.texts().await,
        vec!["Devi rispondere al messaggio di un utente per aggiungerlo."]
    );
    assert_eq!(store.membership_count().await, 0);
}

#[tokio::test]
async fn add_member_without_argument_shows_usage() {
    let store = Arc::new(MemoryDepartmentStore::new());
    let platform = RecordingPlatform::with_admins(&[ADMIN_ID]);

    router(&store)
        .route(
            &platform,
            &command(group_meta(ADMIN_ID, 1), "/aggiungi_membro", Some(user(MEMBER_ID))),
        )
        .await;

    assert_eq!(
        platform.texts().await,
        vec!["Uso: Rispondi a un utente con /aggiungi_membro @nome_reparto"]
    );
}

#[tokio::test]
async fn add_member_to_missing_department() {
    let store = Arc::new(MemoryDepartmentStore::new());
    let platform = RecordingPlatform::with_admins(&[ADMIN_ID]);

    router(&store)
        .route(
            &platform,
            &command(group_meta(ADMIN_ID, 1), "/aggiungi_membro @aero", Some(user(MEMBER_ID))),
        )
        .await;

    assert_eq!(
        platform.texts().await,
        vec!["Il reparto @aero non esiste. Crealo prima con /crea_reparto @aero"]
    );
    assert_eq!(store.membership_count().await, 0);
}

#[tokio::test]
async fn add_and_remove_member() {
    let store = Arc::new(MemoryDepartmentStore::new());
    store.create_department(GROUP_CHAT, "@aero").await.unwrap();
    let platform = RecordingPlatform::with_admins(&[ADMIN_ID]);
    let router = router(&store);

    router
        .route(
            &platform,
            &command(group_meta(ADMIN_ID, 1), "/aggiungi_membro @Aero", Some(user(MEMBER_ID))),
        )
        .await;
    assert_eq!(store.list_members(GROUP_CHAT, "@aero").await.unwrap().len(), 1);

    router
        .route(
            &platform,
            &command(group_meta(ADMIN_ID, 2), "/rimuovi_membro @aero", Some(user(MEMBER_ID))),
        )
        .await;
    router
        .route(
            &platform,
            &command(group_meta(ADMIN_ID, 3), "/rimuovi_membro @aero", Some(user(MEMBER_ID))),
        )
        .await;

    assert_eq!(
        platform.texts().await,
        vec![
            "Utente User 2 aggiunto a @aero.",
            "Utente User 2 rimosso da @aero.",
            "L'utente User 2 non era in @aero.",
        ]
    );
    assert_eq!(store.membership_count().await, 0);
}

#[tokio::test]
async fn remove_member_needs_a_reply_target() {
    let store = Arc::new(MemoryDepartmentStore::new());
    let platform = RecordingPlatform::with_admins(&[ADMIN_ID]);

    router(&store)
        .route(&platform, &command(group_meta(ADMIN_ID, 1), "/rimuovi_membro @aero", None))
        .await;

    assert_eq!(
        platform.texts().await,
        vec!["Devi rispondere al messaggio di un utente per rimuoverlo."]
    );
}

#[tokio::test]
async fn non_admin_cannot_add_members() {
    let store = Arc::new(MemoryDepartmentStore::new());
    store.create_department(GROUP_CHAT, "@aero").await.unwrap();
    let platform = RecordingPlatform::with_admins(&[ADMIN_ID]);

    router(&store)
        .route(
            &platform,
            &command(group_meta(OTHER_ID, 1), "/aggiungi_membro @aero", Some(user(OTHER_ID))),
        )
        .await;

    assert_eq!(platform.texts().await, vec![replies::ADMIN_ONLY]);
    assert_eq!(store.membership_count().await, 0);
}

#[tokio::test]
async fn anyone_can_list_members() {
    let store = Arc::new(MemoryDepartmentStore::new());
    store.create_department(GROUP_CHAT, "@aero").await.unwrap();
    store
        .add_member(GROUP_CHAT, "@aero", MEMBER_ID, Some("Mario Rossi"))
        .await
        .unwrap();
    let platform = RecordingPlatform::failing_admin_lookup();

    router(&store)
        .route(&platform, &command(group_meta(OTHER_ID, 1), "/lista_reparto @AERO", None))
        .await;

    assert_eq!(
        platform.texts().await,
        vec!["Membri del reparto @aero:\n- Mario Rossi (ID: 2)\n"]
    );
}

#[tokio::test]
async fn listing_empty_or_missing_department() {
    let store = Arc::new(MemoryDepartmentStore::new());
    let platform = RecordingPlatform::with_admins(&[]);
    let router = router(&store);

    router
        .route(&platform, &command(group_meta(OTHER_ID, 1), "/lista_reparto @aero", None))
        .await;
    router
        .route(&platform, &command(group_meta(OTHER_ID, 2), "/lista_reparto", None))
        .await;

    assert_eq!(
        platform.texts().await,
        vec![
            "Nessun membro trovato per il reparto @aero.",
            "Uso: /lista_reparto @nome_reparto",
        ]
    );
}

#[tokio::test]
async fn store_failures_become_error_replies() {
    let router = UpdateRouter::new(Arc::new(FailingStore));
    let platform = RecordingPlatform::with_admins(&[ADMIN_ID]);

    let commands = [
        ("/crea_reparto @aero", None),
        ("/aggiungi_membro @aero", Some(user(MEMBER_ID))),
        ("/rimuovi_membro @aero", Some(user(MEMBER_ID))),
        ("/lista_reparto @aero", None),
    ];
    for (id, (text, reply_to)) in (1..).zip(commands) {
        router
            .route(&platform, &command(group_meta(ADMIN_ID, id), text, reply_to))
            .await;
    }

    assert_eq!(
        platform.texts().await,
        vec![
            "Errore: il reparto @aero esiste già o c'è stato un problema.".to_string(),
            replies::GENERIC_ERROR.to_string(),
            replies::GENERIC_ERROR.to_string(),
            replies::GENERIC_ERROR.to_string(),
        ]
    );
}
