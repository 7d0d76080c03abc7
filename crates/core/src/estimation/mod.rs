pub mod age_gender;
