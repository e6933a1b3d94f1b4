//! Admin service tests against the in-memory unit of work.

mod support;

use uuid::Uuid;

use common::{AppError, ErrorKind};
use domain::UserRole;
use forum_service_lib::service::{AdminService, ProfileService, ServiceContainer};

use support::{services, signed_in, InMemoryForum};

#[tokio::test]
async fn test_admin_deletes_user() {
    let forum = InMemoryForum::new();
    let admin = signed_in(&forum, UserRole::Admin, "root");
    let target = signed_in(&forum, UserRole::NonAdmin, "alice");
    let container = services(&forum);

    let id = container
        .admin()
        .delete_user(&target.user.id.to_string(), &admin.token)
        .await
        .unwrap();

    assert_eq!(id, target.user.id);
    assert!(!forum.user_exists(target.user.id));

    let err = container
        .profiles()
        .get_profile(&target.user.id.to_string(), &admin.token)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UserNotFound));
}

#[tokio::test]
async fn test_delete_user_cascades() {
    let forum = InMemoryForum::new();
    let admin = signed_in(&forum, UserRole::Admin, "root");
    let target = signed_in(&forum, UserRole::NonAdmin, "alice");
    let question = forum.add_question(&admin.user, "Question?");
    forum.add_answer(&target.user, &question, "answer by alice");
    forum.add_answer(&admin.user, &question, "answer by root");

    services(&forum)
        .admin()
        .delete_user(&target.user.id.to_string(), &admin.token)
        .await
        .unwrap();

    assert_eq!(forum.answer_count(), 1);
    assert_eq!(forum.session_count(), 1);
}

#[tokio::test]
async fn test_non_admin_is_forbidden_regardless_of_target() {
    let forum = InMemoryForum::new();
    let member = signed_in(&forum, UserRole::NonAdmin, "alice");
    let other = forum.add_user(UserRole::NonAdmin, "bob");
    let admin = services(&forum).admin();

    for target in [
        other.id.to_string(),
        member.user.id.to_string(),
        Uuid::new_v4().to_string(),
        "not-a-uuid".to_string(),
    ] {
        let err = admin.delete_user(&target, &member.token).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(
            err.user_message(),
            "Unauthorized Access, Entered user is not an admin"
        );
    }
    assert!(forum.user_exists(other.id));
}

#[tokio::test]
async fn test_delete_unknown_user() {
    let forum = InMemoryForum::new();
    let admin = signed_in(&forum, UserRole::Admin, "root");
    let service = services(&forum).admin();

    let err = service
        .delete_user(&Uuid::new_v4().to_string(), &admin.token)
        .await
        .unwrap_err();

    assert_eq!(err.code(), "USR-001");
    assert_eq!(err.user_message(), "User with entered uuid does not exist");
}

#[tokio::test]
async fn test_delete_user_twice() {
    let forum = InMemoryForum::new();
    let admin = signed_in(&forum, UserRole::Admin, "root");
    let target = forum.add_user(UserRole::NonAdmin, "alice");
    let service = services(&forum).admin();
    let id = target.id.to_string();

    service.delete_user(&id, &admin.token).await.unwrap();
    let err = service.delete_user(&id, &admin.token).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UserNotFound);
}

#[tokio::test]
async fn test_delete_user_session_checks() {
    let forum = InMemoryForum::new();
    let admin = signed_in(&forum, UserRole::Admin, "root");
    let service = services(&forum).admin();
    let missing = Uuid::new_v4().to_string();

    let err = service.delete_user(&missing, "bogus").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotSignedIn);

    forum.sign_out(&admin.token);
    let err = service.delete_user(&missing, &admin.token).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SignedOut);
    assert_eq!(
        err.user_message(),
        "User is signed out. Sign in first to delete a user"
    );
}
