use pricing_backend::data_setup::seed_test_data;
use pricing_backend::db::DatabaseHandle;

pub fn db_setup() -> DatabaseHandle {
    DatabaseHandle::in_memory().expect("Can't create in-memory database")
}

#[allow(dead_code)]
pub fn seeded_db_setup() -> DatabaseHandle {
    let db = db_setup();
    seed_test_data(&db).expect("Can't seed test data");
    db
}
