pub mod facility_data;
