//! # 認証ユースケース
//!
//! 送信された認証情報ペアを検証し、成功時にトークンを発行する。
//!
//! ## 検証手順
//!
//! 1. 認証情報ペアを正規化する（メールアドレスのみトリム）。空があれば `MissingField`
//! 2. 認証情報ストアをメールアドレスで引く。なければ `InvalidCredentials`
//! 3. パスワードを照合する。一致しなければ `InvalidCredentials`
//! 4. ユーザー記述子を組み立て、トークンを発行する
//!
//! ストア未登録とパスワード不一致は同じエラーにする。
//! 検証処理は状態を変更せず、ログも出力しない。

use std::sync::Arc;

use teachereye_domain::{credential::Credential, token::AuthToken, user::UserDescriptor};
use teachereye_infra::{CredentialStore, PasswordChecker, TokenIssuer};

use crate::error::AuthError;

/// ログイン成功結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub user:  UserDescriptor,
    pub token: AuthToken,
}

/// 認証ユースケースの実装
pub struct AuthUseCaseImpl {
    credential_store: Arc<dyn CredentialStore>,
    password_checker: Arc<dyn PasswordChecker>,
    token_issuer:     Arc<dyn TokenIssuer>,
}

impl AuthUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        password_checker: Arc<dyn PasswordChecker>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            credential_store,
            password_checker,
            token_issuer,
        }
    }

    /// 認証情報ペアを検証する
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let credential = Credential::new(email, password)?;

        let Some(record) = self.credential_store.lookup(credential.email()).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        if self
            .password_checker
            .verify(credential.password(), &record.password)
            .is_mismatch()
        {
            return Err(AuthError::InvalidCredentials);
        }

        let user = UserDescriptor::new(
            record.user_id,
            record.display_name,
            credential.email().clone(),
        );
        let token = self.token_issuer.issue(&user);

        Ok(LoginOutcome { user, token })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use teachereye_domain::{
        password::StoredPassword,
        user::{Email, UserId},
    };
    use teachereye_infra::{
        CredentialRecord,
        ExactPasswordChecker,
        InMemoryCredentialStore,
        InfraError,
        StaticTokenIssuer,
    };

    use super::*;

    // テスト用スタブ

    struct FailingCredentialStore;

    #[async_trait]
    impl CredentialStore for FailingCredentialStore {
        async fn lookup(&self, _email: &Email) -> Result<Option<CredentialRecord>, InfraError> {
            Err(InfraError::store("connection refused"))
        }
    }

    #[fixture]
    fn sut() -> AuthUseCaseImpl {
        let store = InMemoryCredentialStore::with_entry(
            Email::new("admin@teachereye.ai").unwrap(),
            CredentialRecord::new(UserId::new(1), "Admin", StoredPassword::new("admin123")),
        );
        AuthUseCaseImpl::new(
            Arc::new(store),
            Arc::new(ExactPasswordChecker::new()),
            Arc::new(StaticTokenIssuer::new("demo-token")),
        )
    }

    fn admin_outcome() -> LoginOutcome {
        LoginOutcome {
            user:  UserDescriptor::new(
                UserId::new(1),
                "Admin",
                Email::new("admin@teachereye.ai").unwrap(),
            ),
            token: AuthToken::new("demo-token"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_成功(sut: AuthUseCaseImpl) {
        let result = sut.login("admin@teachereye.ai", "admin123").await;

        assert_eq!(result.unwrap(), admin_outcome());
    }

    #[rstest]
    #[case("  admin@teachereye.ai  ")]
    #[case("\tadmin@teachereye.ai\n")]
    #[tokio::test]
    async fn test_login_メールアドレスはトリムして照合する(
        sut: AuthUseCaseImpl,
        #[case] email: &str,
    ) {
        let result = sut.login(email, "admin123").await;

        let outcome = result.unwrap();
        assert_eq!(outcome.user.email.as_str(), "admin@teachereye.ai");
        assert_eq!(outcome, admin_outcome());
    }

    #[rstest]
    #[case("", "")]
    #[case("", "admin123")]
    #[case("   ", "admin123")]
    #[case("admin@teachereye.ai", "")]
    #[case("unknown@teachereye.ai", "")]
    #[tokio::test]
    async fn test_login_空のフィールドはmissing_field(
        sut: AuthUseCaseImpl,
        #[case] email: &str,
        #[case] password: &str,
    ) {
        let result = sut.login(email, password).await;

        assert!(matches!(result, Err(AuthError::MissingField)));
    }

    #[rstest]
    #[case("admin@teachereye.ai", " admin123")]
    #[case("admin@teachereye.ai", "admin123 ")]
    #[case("admin@teachereye.ai", "ADMIN123")]
    #[case("admin@teachereye.ai", "wrong")]
    #[case("ADMIN@teachereye.ai", "admin123")]
    #[case("unknown@teachereye.ai", "admin123")]
    #[case("admin", "admin123")]
    #[tokio::test]
    async fn test_login_一致しない認証情報はinvalid_credentials(
        sut: AuthUseCaseImpl,
        #[case] email: &str,
        #[case] password: &str,
    ) {
        let result = sut.login(email, password).await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_同じ入力には同じ結果を返す(sut: AuthUseCaseImpl) {
        let first = sut.login("admin@teachereye.ai", "admin123").await.unwrap();
        let second = sut.login("admin@teachereye.ai", "admin123").await.unwrap();
        assert_eq!(first, second);

        for _ in 0..3 {
            let result = sut.login("admin@teachereye.ai", "wrong").await;
            assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        }
    }

    #[tokio::test]
    async fn test_login_ストア障害はstoreエラー() {
        let sut = AuthUseCaseImpl::new(
            Arc::new(FailingCredentialStore),
            Arc::new(ExactPasswordChecker::new()),
            Arc::new(StaticTokenIssuer::new("demo-token")),
        );

        let result = sut.login("admin@teachereye.ai", "admin123").await;

        assert!(matches!(result, Err(AuthError::Store(_))));
    }

    #[tokio::test]
    async fn test_login_空フィールドはストアを引かない() {
        let sut = AuthUseCaseImpl::new(
            Arc::new(FailingCredentialStore),
            Arc::new(ExactPasswordChecker::new()),
            Arc::new(StaticTokenIssuer::new("demo-token")),
        );

        let result = sut.login("", "admin123").await;

        assert!(matches!(result, Err(AuthError::MissingField)));
    }
}
