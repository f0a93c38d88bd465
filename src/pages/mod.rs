pub mod home;
pub mod how_it_works;
pub mod platforms;
