//! # Seeder Integration Tests
//!
//! Exercises the coordinator against a real (in-memory SQLite) database
//! with the production migrations applied: ordering, idempotence,
//! skip behavior, fail-fast propagation, and history record shape.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use entity::{roles, seeder_history};
use error::{AppError, Result, SeedResult};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DatabaseTransaction, EntityTrait, PaginatorTrait, Set};
use seeder::{history, SeedServices, SeedUnit, Seeder};
use tokio::sync::watch;

/// Fresh in-memory database with all migrations applied.
async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    db
}

fn no_shutdown() -> watch::Receiver<bool> {
    // The receiver keeps reporting the last value after the sender drops.
    let (_tx, rx) = watch::channel(false);
    rx
}

/// Test unit that records its invocations and inserts one domain row.
struct Probe {
    name: &'static str,
    priority: i32,
    fail: bool,
    always_run: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Probe {
    fn new(name: &'static str, priority: i32, calls: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name,
            priority,
            fail: false,
            always_run: false,
            calls: Arc::clone(calls),
        }
    }

    fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn always_run(mut self) -> Self {
        self.always_run = true;
        self
    }
}

#[async_trait::async_trait]
impl SeedUnit for Probe {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    async fn should_run(&self, txn: &DatabaseTransaction, _services: &SeedServices) -> Result<bool> {
        if self.always_run {
            return Ok(true);
        }
        Ok(!history::has_run(txn, self.name).await?)
    }

    async fn seed(&self, txn: &DatabaseTransaction, _services: &SeedServices) -> Result<SeedResult> {
        self.calls.lock().unwrap().push(self.name.to_string());

        // One domain row per run, so tests can observe committed effects.
        let row = roles::ActiveModel {
            id: Set(uuid::Uuid::new_v4()),
            name: Set(format!("{}-row-{}", self.name, uuid::Uuid::new_v4())),
            created_at: Set(Utc::now()),
        };
        roles::Entity::insert(row).exec(txn).await?;

        if self.fail {
            return Err(AppError::seed(format!("{} exploded", self.name)));
        }

        Ok(SeedResult::success(self.name, 1, 0))
    }
}

async fn domain_row_count(db: &DatabaseConnection) -> u64 {
    roles::Entity::find().count(db).await.unwrap()
}

async fn history_rows(db: &DatabaseConnection) -> Vec<seeder_history::Model> {
    history::all_records(db).await.unwrap()
}

#[tokio::test]
async fn test_units_run_in_ascending_priority_order() {
    let db = setup_db().await;
    let calls = Arc::new(Mutex::new(Vec::new()));

    // Registered out of order on purpose.
    let mut seeder = Seeder::new();
    seeder.register(Arc::new(Probe::new("gamma", 3, &calls)));
    seeder.register(Arc::new(Probe::new("alpha", 1, &calls)));
    seeder.register(Arc::new(Probe::new("beta", 2, &calls)));

    seeder
        .run_all(&db, &SeedServices::new(), no_shutdown())
        .await
        .expect("pass succeeds");

    assert_eq!(*calls.lock().unwrap(), vec!["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn test_second_pass_is_a_no_op_with_default_predicate() {
    let db = setup_db().await;
    let calls = Arc::new(Mutex::new(Vec::new()));

    let mut seeder = Seeder::new();
    seeder.register(Arc::new(Probe::new("alpha", 1, &calls)));
    seeder.register(Arc::new(Probe::new("beta", 2, &calls)));

    let services = SeedServices::new();
    let first = seeder.run_all(&db, &services, no_shutdown()).await.unwrap();
    let second = seeder.run_all(&db, &services, no_shutdown()).await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 0, "second pass must execute nothing");
    assert_eq!(calls.lock().unwrap().len(), 2);
    assert_eq!(domain_row_count(&db).await, 2, "no duplicate domain rows");
}

#[tokio::test]
async fn test_skipped_unit_does_not_block_later_units() {
    let db = setup_db().await;
    let calls = Arc::new(Mutex::new(Vec::new()));

    // "alpha" already ran in a previous startup.
    history::record_completion(&db, "alpha", 1).await.unwrap();

    let mut seeder = Seeder::new();
    seeder.register(Arc::new(Probe::new("alpha", 1, &calls)));
    seeder.register(Arc::new(Probe::new("beta", 2, &calls)));

    let results = seeder.run_all(&db, &SeedServices::new(), no_shutdown()).await.unwrap();

    assert_eq!(*calls.lock().unwrap(), vec!["beta"]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].seed_name, "beta");
}

#[tokio::test]
async fn test_failure_halts_remaining_units_and_propagates() {
    let db = setup_db().await;
    let calls = Arc::new(Mutex::new(Vec::new()));

    let mut seeder = Seeder::new();
    seeder.register(Arc::new(Probe::new("alpha", 1, &calls)));
    seeder.register(Arc::new(Probe::new("beta", 2, &calls).failing()));
    seeder.register(Arc::new(Probe::new("gamma", 3, &calls)));

    let err = seeder
        .run_all(&db, &SeedServices::new(), no_shutdown())
        .await
        .expect_err("beta's failure must surface");

    assert_eq!(err.code(), "SEED_ERROR");
    assert_eq!(*calls.lock().unwrap(), vec!["alpha", "beta"], "gamma never runs");

    // alpha committed; beta rolled back entirely (domain row and history).
    let history = history_rows(&db).await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].seeder_name, "alpha");
    assert_eq!(domain_row_count(&db).await, 1);
}

#[tokio::test]
async fn test_history_record_shape_for_role_seeder() {
    let db = setup_db().await;
    let before = Utc::now();

    let results = Seeder::builtin()
        .run_all(&db, &SeedServices::new(), no_shutdown())
        .await
        .unwrap();
    let after = Utc::now();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].inserted_count, 2, "Admin and User rows created");

    let history = history_rows(&db).await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].seeder_name, "RoleSeeder");
    assert_eq!(history[0].seed_priority, 1);
    assert!(history[0].last_seeded_at >= before && history[0].last_seeded_at <= after);
}

#[tokio::test]
async fn test_role_seeder_creates_each_role_once() {
    let db = setup_db().await;
    let services = SeedServices::new();

    let seeder = Seeder::builtin();
    seeder.run_all(&db, &services, no_shutdown()).await.unwrap();
    seeder.run_all(&db, &services, no_shutdown()).await.unwrap();

    let names: Vec<String> = roles::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Admin".to_string()));
    assert!(names.contains(&"User".to_string()));
}

#[tokio::test]
async fn test_end_to_end_two_units_then_rerun() {
    let db = setup_db().await;
    let calls = Arc::new(Mutex::new(Vec::new()));

    let mut seeder = Seeder::new();
    seeder.register(Arc::new(Probe::new("Alpha", 1, &calls)));
    seeder.register(Arc::new(Probe::new("Beta", 2, &calls)));

    let services = SeedServices::new();
    seeder.run_all(&db, &services, no_shutdown()).await.unwrap();

    let history = history_rows(&db).await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].seeder_name, "Alpha");
    assert_eq!(history[1].seeder_name, "Beta");
    assert!(
        history[0].last_seeded_at <= history[1].last_seeded_at,
        "Alpha completes no later than Beta"
    );
    assert_eq!(domain_row_count(&db).await, 2);

    // Second run: nothing changes.
    seeder.run_all(&db, &services, no_shutdown()).await.unwrap();
    assert_eq!(domain_row_count(&db).await, 2);
    assert_eq!(history_rows(&db).await.len(), 2);
}

#[tokio::test]
async fn test_shutdown_flag_aborts_before_first_unit() {
    let db = setup_db().await;
    let calls = Arc::new(Mutex::new(Vec::new()));

    let mut seeder = Seeder::new();
    seeder.register(Arc::new(Probe::new("alpha", 1, &calls)));

    let (tx, rx) = watch::channel(false);
    tx.send(true).unwrap();

    let err = seeder
        .run_all(&db, &SeedServices::new(), rx)
        .await
        .expect_err("cancelled pass must error");

    assert_eq!(err.code(), "CANCELLED");
    assert!(calls.lock().unwrap().is_empty());
    assert!(history_rows(&db).await.is_empty());
}

#[tokio::test]
async fn test_completion_records_are_upserts() {
    let db = setup_db().await;

    history::record_completion(&db, "alpha", 1).await.unwrap();
    let first = history_rows(&db).await;
    history::record_completion(&db, "alpha", 5).await.unwrap();
    let second = history_rows(&db).await;

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1, "repeated completion must not duplicate the row");
    assert_eq!(second[0].seed_priority, 5);
    assert!(second[0].last_seeded_at >= first[0].last_seeded_at);
}

#[tokio::test]
async fn test_always_run_override_executes_every_pass() {
    let db = setup_db().await;
    let calls = Arc::new(Mutex::new(Vec::new()));

    let mut seeder = Seeder::new();
    seeder.register(Arc::new(Probe::new("audit", 1, &calls).always_run()));

    let services = SeedServices::new();
    seeder.run_all(&db, &services, no_shutdown()).await.unwrap();
    seeder.run_all(&db, &services, no_shutdown()).await.unwrap();

    assert_eq!(calls.lock().unwrap().len(), 2, "override bypasses the history gate");
    // The history table still holds a single row for the unit.
    assert_eq!(history_rows(&db).await.len(), 1);
}
