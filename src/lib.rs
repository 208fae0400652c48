pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod linearfunction;

        pub mod parametriccurve {
            pub mod parametriccurve;
            pub mod shiftedexponential;
            pub mod shiftedrational;
            pub mod inversesquareroot;
            pub mod inversesquare;
            pub mod rampplateau;
            pub mod squareroot;
            pub mod verticalcurve;
        }
    }
    pub mod solver;
}

pub mod profile {
    pub mod units;
    pub mod trajectorypoint;
    pub mod scenario;
    pub mod flareprofile;
}
