//! Built-in layouts of the appliance keyboard

mod ara;
mod deu;
mod por;
mod rus;
mod spa;
mod tha;
mod ukr;
mod vie;

use super::LayoutDef;

pub(crate) const BUILTIN: &[LayoutDef] = &[
    rus::RUS,
    ukr::UKR,
    vie::VIE,
    tha::THA,
    spa::SPA,
    por::POR,
    deu::DEU,
    ara::ARA,
];
