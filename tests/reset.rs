#[cfg(test)]
mod tests {
    use smtbiz::db::customers::{Customers, SEED_CUSTOMERS};
    use smtbiz::libs::customer::Customer;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ResetTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ResetTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ResetTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn assert_canonical(customers: &mut Customers) {
        let all = customers.list_all().unwrap();
        assert_eq!(all.len(), 5);
        for (record, (id, name, email, mobile)) in all.iter().zip(SEED_CUSTOMERS) {
            assert_eq!(record.id, id);
            assert_eq!(record.name, name);
            assert_eq!(record.email, email);
            assert_eq!(record.mobile, mobile);
        }
    }

    #[test_context(ResetTestContext)]
    #[test]
    fn test_reset_restores_seed_records_after_changes(_ctx: &mut ResetTestContext) {
        let mut customers = Customers::new().unwrap();

        // Mangle the store in every way an operation can
        customers.insert(&Customer::new("200020", "Extra Person", "extra@smt.com", "0422222222"));
        customers.update(&Customer::new("100001", "Renamed", "renamed@smt.com", "0433333333"));
        customers.delete("100005");

        assert!(customers.reset());
        assert_canonical(&mut customers);
    }

    #[test_context(ResetTestContext)]
    #[test]
    fn test_reset_on_pristine_store(_ctx: &mut ResetTestContext) {
        let mut customers = Customers::new().unwrap();

        assert!(customers.reset());
        assert_canonical(&mut customers);
    }

    #[test_context(ResetTestContext)]
    #[test]
    fn test_reset_on_emptied_store(_ctx: &mut ResetTestContext) {
        let mut customers = Customers::new().unwrap();

        for (id, _, _, _) in SEED_CUSTOMERS {
            customers.delete(id);
        }
        assert!(customers.list_all().unwrap().is_empty());

        assert!(customers.reset());
        assert_canonical(&mut customers);
    }

    #[test_context(ResetTestContext)]
    #[test]
    fn test_reset_survives_reopen(_ctx: &mut ResetTestContext) {
        {
            let mut customers = Customers::new().unwrap();
            customers.insert(&Customer::new("200021", "Short Lived", "short@smt.com", "0444444444"));
            assert!(customers.reset());
        }

        // Fresh connection sees the canonical state
        let mut customers = Customers::new().unwrap();
        assert_canonical(&mut customers);
    }
}
