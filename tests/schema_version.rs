#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use smtbiz::db::customers::{Customers, SEED_CUSTOMERS};
    use smtbiz::db::db::{get_db_version, DB_FILE_NAME, DB_VERSION};
    use smtbiz::libs::customer::Customer;
    use smtbiz::libs::data_storage::DataStorage;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct VersionTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for VersionTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            VersionTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(VersionTestContext)]
    #[test]
    fn test_fresh_store_is_stamped_with_current_version(_ctx: &mut VersionTestContext) {
        let _customers = Customers::new().unwrap();

        let path = DataStorage::new().get_path(DB_FILE_NAME).unwrap();
        let conn = Connection::open(path).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), DB_VERSION);
    }

    #[test_context(VersionTestContext)]
    #[test]
    fn test_version_mismatch_drops_and_reseeds(_ctx: &mut VersionTestContext) {
        {
            let mut customers = Customers::new().unwrap();
            customers.insert(&Customer::new("200030", "Doomed Record", "doomed@smt.com", "0455555555"));
            assert_eq!(customers.list_all().unwrap().len(), 6);
        }

        // Simulate a file written by a different application version
        let path = DataStorage::new().get_path(DB_FILE_NAME).unwrap();
        {
            let conn = Connection::open(&path).unwrap();
            conn.pragma_update(None, "user_version", DB_VERSION + 1).unwrap();
        }

        // Reopening takes the destructive branch: table dropped and reseeded
        let mut customers = Customers::new().unwrap();
        let all = customers.list_all().unwrap();
        assert_eq!(all.len(), 5);
        for (record, (id, _, _, _)) in all.iter().zip(SEED_CUSTOMERS) {
            assert_eq!(record.id, id);
        }

        let conn = Connection::open(&path).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), DB_VERSION);
    }

    #[test_context(VersionTestContext)]
    #[test]
    fn test_matching_version_preserves_data(_ctx: &mut VersionTestContext) {
        {
            let mut customers = Customers::new().unwrap();
            customers.insert(&Customer::new("200031", "Kept Record", "kept@smt.com", "0466666666"));
        }

        let mut customers = Customers::new().unwrap();
        let all = customers.list_all().unwrap();
        assert_eq!(all.len(), 6);
        assert!(all.iter().any(|c| c.id == "200031"));
    }
}
