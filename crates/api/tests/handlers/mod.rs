mod preference_test;
