//! Fixture structs shared by the integration tests.

use flagbind::{BindFlags, ConversionError, DescribeFlag, FlagKind, FlagTag, FlagValue, ScalarKind};

/// A free-text description that supplies its own flag metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description(pub String);

impl DescribeFlag for Description {
    fn flag_tag(&self) -> FlagTag {
        FlagTag::new("desc")
            .with_shorthand("d")
            .with_usage("student description")
    }
}

impl FlagValue for Description {
    type Item = String;
    const KIND: FlagKind = FlagKind::Scalar(ScalarKind::String);

    fn parse_default(raw: &str) -> Result<Self, ConversionError> {
        Ok(Self(raw.to_owned()))
    }

    fn from_items(mut items: Vec<String>) -> Option<Self> {
        items.pop().map(Self)
    }
}

#[derive(Debug, Default, BindFlags)]
pub struct Student {
    #[flag("Name:name;shorthand:n;value:ss;usage:name of student")]
    pub name: String,
    #[flag("age;a;0;usage:age of student")]
    pub age: i64,
    #[flag("sex;s;true;sex")]
    pub sex: bool,
    #[flag(describe)]
    pub desc: Description,
    #[flag("e")]
    pub e: Vec<f64>,
}

#[derive(Debug, Default, BindFlags)]
pub struct Tutor {
    #[flag("name;t;tt;name of tutor")]
    pub name: String,
}

#[derive(Debug, Default, BindFlags)]
pub struct School {
    #[flag("name;;sss;name of school")]
    pub name: String,
    #[flag("student", nested)]
    pub student: Student,
    #[flag("tutor", nested)]
    pub tutor: Tutor,
}
