use std::collections::BTreeSet;

use mockall::mock;

use eventpoll_core::models::Slot;

use crate::models::DbPreference;

// Mock repository for testing
mock! {
    pub PreferenceRepo {
        pub async fn get_preferences(
            &self,
            user_name: &'static str,
        ) -> eyre::Result<Vec<DbPreference>>;

        pub async fn replace_preferences(
            &self,
            user_name: &'static str,
            selection: BTreeSet<Slot>,
        ) -> eyre::Result<()>;

        pub async fn get_all_preferences(&self) -> eyre::Result<Vec<DbPreference>>;
    }
}
