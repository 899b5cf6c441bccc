use super::LayoutDef;

pub(crate) const THA: LayoutDef = LayoutDef {
    code: "tha",
    name: "ภาษาไทย",
    locale: "th",
    normal: &[
        "_ = \u{e52} \u{e53} \u{e54} \u{e55} \u{e39} \u{e57} \u{e58} \u{e59} \u{e50} \u{e51} \u{e56} {bksp}",
        "\u{e47} \u{e15} \u{e22} \u{e2d} \u{e23} \u{e48} \u{e14} \u{e21} \u{e27} \u{e41} \u{e43} \u{e0c}",
        "{change} \u{e49} \u{e17} \u{e07} \u{e01} \u{e31} \u{e35} \u{e32} \u{e19} \u{e40} \u{e44} \u{e02} \u{e3a}",
        "{shift} \u{e1a} \u{e1b} \u{e25} \u{e2b} \u{e34} \u{e04} \u{e2a} \u{e30} \u{e08} \u{e1e} {shift}",
        "{alt} &nbsp {alt}",
    ],
    shift: &[
        "\u{e3f} + \" / , ? \u{e38} \u{e45} . ( ) - % {bksp}",
        "\u{e4a} \u{e24} \u{e46} \u{e0d} \u{e29} \u{e36} \u{e1d} \u{e0b} \u{e16} \u{e12} \u{e2f} \u{e26}",
        "{change} \u{e4b} \u{e18} \u{e33} \u{e13} \u{e4c} \u{e37} \u{e1c} \u{e0a} \u{e42} \u{e06} \u{e11} \u{e4d}",
        "{shift} \u{e0e} \u{e0f} \u{e10} \u{e20} \u{e31}\u{e49} \u{e28} \u{e2e} \u{e1f} \u{e09} \u{e2c} {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt: &[
        "_ = \u{e52} \u{e53} \u{e54} \u{e55} \u{e39} \u{e57} \u{e58} \u{e59} \u{e50} \u{e51} \u{e56} {bksp}",
        "\u{e47} \u{e15} \u{e22} \u{e2d} \u{e23} \u{e48} \u{e14} \u{e21} \u{e27} \u{e41} \u{e43} \u{e0c}",
        "{change} \u{e49} \u{e17} \u{e07} \u{e01} \u{e31} \u{e35} \u{e32} \u{e19} \u{e40} \u{e44} \u{e02} \u{e3a}",
        "{shift} \u{e1a} \u{e1b} \u{e25} \u{e2b} \u{e34} \u{e04} \u{e2a} \u{e30} \u{e08} \u{e1e} {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt_shift: &[
        "\u{e3f} + \" / , ? \u{e38} \u{e45} . ( ) - % {bksp}",
        "\u{e4a} \u{e24} \u{e46} \u{e0d} \u{e29} \u{e36} \u{e1d} \u{e0b} \u{e16} \u{e12} \u{e2f} \u{e26}",
        "{change} \u{e4b} \u{e18} \u{e33} \u{e13} \u{e4c} \u{e37} \u{e1c} \u{e0a} \u{e42} \u{e06} \u{e11} \u{e4d}",
        "{shift} \u{e0e} \u{e0f} \u{e10} \u{e20} \u{e31}\u{e49} \u{e28} \u{e2e} \u{e1f} \u{e09} \u{e2c} {shift}",
        "{alt} &nbsp {alt}",
    ],
    transforms: &[],
};
