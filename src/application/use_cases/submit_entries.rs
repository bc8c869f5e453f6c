//! # Submit Entries Use Case
//!
//! 手当エントリのバッチ送信ユースケース

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use log::info;
use tokio::time::sleep;

use crate::domain::entities::allowance_entry::AllowanceEntry;
use crate::domain::entities::session::Credentials;
use crate::domain::error::PortalError;
use crate::domain::repositories::allowance_repository::AllowanceRepository;

/// バッチ送信結果のサマリー
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// 送信に成功したエントリ数
    pub submitted_count: usize,
    /// 送信した日付（送信順）
    pub submitted_dates: Vec<NaiveDate>,
}

/// 手当エントリのバッチ送信ユースケース
///
/// 最初に一度だけ認証し、取得したセッショントークンを使い回して
/// エントリを与えられた順に直列で送信する。並行送信は行わない
pub struct SubmitEntriesUseCase<R: AllowanceRepository> {
    repository: Arc<R>,
    throttle: Option<Duration>,
}

impl<R: AllowanceRepository> SubmitEntriesUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `repository` - 手当リポジトリ
    /// * `throttle` - 連続送信間の待機時間（`None`で無効）
    pub fn new(repository: Arc<R>, throttle: Option<Duration>) -> Self {
        Self {
            repository,
            throttle,
        }
    }

    /// エントリを順次送信する
    ///
    /// 認証に失敗した場合は1件も送信せずに失敗する。
    /// 送信に失敗した時点でバッチ全体を打ち切り、失敗した日付を
    /// エラーに含めて伝播する。送信済みのエントリは取り消さない
    ///
    /// # Arguments
    ///
    /// * `credentials` - ログイン資格情報
    /// * `entries` - 送信するエントリ（昇順）
    ///
    /// # Returns
    ///
    /// 送信結果のサマリー
    ///
    /// # Errors
    ///
    /// 認証失敗は`PortalError::Authentication`等をそのまま、
    /// 送信失敗は`PortalError::Submission`として返す
    pub async fn execute(
        &self,
        credentials: &Credentials,
        entries: &[AllowanceEntry],
    ) -> Result<BatchSummary, PortalError> {
        let token = self.repository.authenticate(credentials).await?;
        info!("authenticated as {}", credentials.username);

        let mut submitted_dates = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            // 連続リクエストの間にスロットルを挟み、ポータル側の負荷を抑える
            if index > 0 {
                if let Some(delay) = self.throttle {
                    sleep(delay).await;
                }
            }

            match self.repository.submit_entry(&token, entry).await {
                Ok(()) => {
                    println!("✓ Submitted allowance for {}", entry.date());
                    info!("submitted allowance for {}", entry.date());
                    submitted_dates.push(entry.date());
                }
                Err(err) => {
                    return Err(PortalError::submission(entry.date(), err));
                }
            }
        }

        Ok(BatchSummary {
            submitted_count: submitted_dates.len(),
            submitted_dates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Instant;

    use crate::domain::entities::session::SessionToken;
    use crate::domain::repositories::allowance_repository::MockAllowanceRepository;

    /// 送信された日付を記録し、指定回数目で失敗するリポジトリ
    struct RecordingRepository {
        submitted: Mutex<Vec<NaiveDate>>,
        fail_at: Option<usize>,
        failure: fn() -> PortalError,
        submit_delay: Option<Duration>,
    }

    impl RecordingRepository {
        fn succeeding() -> Self {
            Self {
                submitted: Mutex::new(Vec::new()),
                fail_at: None,
                failure: || PortalError::Http("500 Internal Server Error".to_string()),
                submit_delay: None,
            }
        }

        fn failing_at(index: usize, failure: fn() -> PortalError) -> Self {
            Self {
                submitted: Mutex::new(Vec::new()),
                fail_at: Some(index),
                failure,
                submit_delay: None,
            }
        }

        fn attempted(&self) -> Vec<NaiveDate> {
            self.submitted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AllowanceRepository for RecordingRepository {
        async fn authenticate(
            &self,
            _credentials: &Credentials,
        ) -> Result<SessionToken, PortalError> {
            SessionToken::new("abc123")
        }

        async fn submit_entry(
            &self,
            _token: &SessionToken,
            entry: &AllowanceEntry,
        ) -> Result<(), PortalError> {
            let attempt = {
                let mut submitted = self.submitted.lock().unwrap();
                submitted.push(entry.date());
                submitted.len() - 1
            };

            if let Some(delay) = self.submit_delay {
                sleep(delay).await;
            }

            if self.fail_at == Some(attempt) {
                return Err((self.failure)());
            }
            Ok(())
        }
    }

    fn create_test_credentials() -> Credentials {
        Credentials {
            username: "user@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    fn create_test_entries(count: u32) -> Vec<AllowanceEntry> {
        (1..=count)
            .map(|day| {
                let date = NaiveDate::from_ymd_opt(2021, 5, day).unwrap();
                AllowanceEntry::new(date, "Acme Corp", 8, 0).unwrap()
            })
            .collect()
    }

    #[tokio::test]
    async fn test_submit_all_entries_in_order() {
        let repository = Arc::new(RecordingRepository::succeeding());
        let use_case = SubmitEntriesUseCase::new(repository.clone(), None);

        let entries = create_test_entries(3);
        let summary = use_case
            .execute(&create_test_credentials(), &entries)
            .await
            .unwrap();

        assert_eq!(summary.submitted_count, 3);
        let expected: Vec<NaiveDate> = entries.iter().map(|e| e.date()).collect();
        assert_eq!(summary.submitted_dates, expected);
        assert_eq!(repository.attempted(), expected);
    }

    #[tokio::test]
    async fn test_empty_batch_succeeds_without_submissions() {
        let repository = Arc::new(RecordingRepository::succeeding());
        let use_case = SubmitEntriesUseCase::new(repository.clone(), None);

        let summary = use_case
            .execute(&create_test_credentials(), &[])
            .await
            .unwrap();

        assert_eq!(summary.submitted_count, 0);
        assert!(repository.attempted().is_empty());
    }

    #[tokio::test]
    async fn test_fail_fast_stops_at_first_failure() {
        // 5件中3件目（index 2）で失敗 → 1..3のみ試行、4..5は未試行
        let repository = Arc::new(RecordingRepository::failing_at(2, || {
            PortalError::Http("500 Internal Server Error".to_string())
        }));
        let use_case = SubmitEntriesUseCase::new(repository.clone(), None);

        let entries = create_test_entries(5);
        let err = use_case
            .execute(&create_test_credentials(), &entries)
            .await
            .unwrap_err();

        let attempted = repository.attempted();
        assert_eq!(attempted.len(), 3);
        assert_eq!(attempted, vec![entries[0].date(), entries[1].date(), entries[2].date()]);

        match err {
            PortalError::Submission { date, .. } => {
                assert_eq!(date, entries[2].date());
            }
            other => panic!("expected Submission error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_authentication_failure_attempts_nothing() {
        let mut mock = MockAllowanceRepository::new();
        mock.expect_authenticate()
            .times(1)
            .returning(|_| Err(PortalError::Authentication));
        mock.expect_submit_entry().times(0);

        let use_case = SubmitEntriesUseCase::new(Arc::new(mock), None);
        let entries = create_test_entries(3);

        let err = use_case
            .execute(&create_test_credentials(), &entries)
            .await
            .unwrap_err();

        assert!(matches!(err, PortalError::Authentication));
    }

    #[tokio::test]
    async fn test_throttle_delays_successive_submissions() {
        let repository = Arc::new(RecordingRepository::succeeding());
        let throttle = Duration::from_millis(50);
        let use_case = SubmitEntriesUseCase::new(repository.clone(), Some(throttle));

        let entries = create_test_entries(3);
        let started = Instant::now();
        use_case
            .execute(&create_test_credentials(), &entries)
            .await
            .unwrap();

        // 3件の間に2回のスロットルが入る
        assert!(started.elapsed() >= throttle * 2);
        assert_eq!(repository.attempted().len(), 3);
    }

    #[tokio::test]
    async fn test_throttle_then_timeout_never_reaches_third_entry() {
        // エントリ2がタイムアウト → エントリ3は未試行、
        // 経過時間はスロットル1回分とエントリ2の時間予算を下回らない
        let timeout_budget = Duration::from_millis(40);
        let throttle = Duration::from_millis(30);

        let repository = Arc::new(RecordingRepository {
            submitted: Mutex::new(Vec::new()),
            fail_at: Some(1),
            failure: || PortalError::Timeout(Duration::from_millis(40)),
            submit_delay: Some(timeout_budget),
        });
        let use_case = SubmitEntriesUseCase::new(repository.clone(), Some(throttle));

        let entries = create_test_entries(3);
        let started = Instant::now();
        let err = use_case
            .execute(&create_test_credentials(), &entries)
            .await
            .unwrap_err();

        assert!(started.elapsed() >= throttle + timeout_budget);
        assert_eq!(repository.attempted().len(), 2);

        match err {
            PortalError::Submission { date, source } => {
                assert_eq!(date, entries[1].date());
                assert!(matches!(*source, PortalError::Timeout(_)));
            }
            other => panic!("expected Submission error, got {:?}", other),
        }
    }
}
