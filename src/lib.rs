pub mod configuration;

pub mod spline {
    pub mod family;
    pub mod intervallocator;
    pub mod pointstore;
    pub mod spline;
    pub mod splineerror;
    pub mod splineset;
    pub mod validator;
}
