mod feedback_test;
mod health_test;
mod index_test;
