//! Common Test Fixtures
//!
//! Enum types shared by the integration suites. Each suite uses a subset.

#![allow(dead_code)]

use enums::define_enum;

define_enum! {
    pub SimpleEnum {
        __SOME_INTERNAL_CONSTANT = 222,
        CAT,
        DOG,
        BIRD = 3,
        FISH,
        __SOME_OTHER_INTERNAL_CONSTANT = 333,
    }
}

define_enum! {
    /// Same members as `SimpleEnum`, different type
    pub OtherSimpleEnum {
        CAT,
        DOG,
        BIRD = 3,
        FISH,
    }
}

define_enum! {
    pub AccessLevelEnum {
        READ,
        WRITE,
        ADMIN,
    }
}

define_enum! {
    /// `DEFAULT` aliases `CAT`
    pub DuplicatedOrdinalEnum {
        CAT,
        DOG,
        BIRD = 3,
        FISH,
        DEFAULT = 0,
    }
}

define_enum! {
    pub IgnoredConstantNameEnum {
        VALID_NAME = 0,
        _IGNORED_NAME = 1,
    }
}
