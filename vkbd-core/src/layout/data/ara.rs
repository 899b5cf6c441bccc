use super::LayoutDef;

pub(crate) const ARA: LayoutDef = LayoutDef {
    code: "ara",
    name: "عرب",
    locale: "ar",
    normal: &[
        "\u{630} \u{661} \u{662} \u{663} \u{664} \u{665} \u{666} \u{667} \u{668} \u{669} \u{660} - = {bksp}",
        "\u{636} \u{635} \u{62b} \u{642} \u{641} \u{63a} \u{639} \u{647} \u{62e} \u{62d} \u{62c} \u{62f}",
        "{change} \u{634} \u{633} \u{64a} \u{628} \u{644} \u{627} \u{62a} \u{646} \u{645} \u{643} \u{637} \\",
        "{shift} \u{626} \u{621} \u{624} \u{631} \u{644}\u{627} \u{649} \u{629} \u{648} \u{632} \u{638} {shift}",
        "{alt} &nbsp {alt}",
    ],
    shift: &[
        "\u{651} ! @ # $ % ^ & * ) ( _ + {bksp}",
        "\u{64e} \u{64b} \u{64f} \u{64c} \u{644}\u{625} \u{625} \u{2018} \u{f7} \u{d7} \u{61b} < >",
        "{change} \u{650} \u{64d} ] [ \u{644}\u{623} \u{623} \u{640} \u{60c} / : \" |",
        "{shift} ~ \u{652} } { \u{644}\u{622} \u{622} \u{2019} , . \u{61f} {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt: &[
        "\u{630} \u{661} \u{662} \u{663} \u{664} \u{665} \u{666} \u{667} \u{668} \u{669} \u{660} - = {bksp}",
        "\u{636} \u{635} \u{62b} \u{642} \u{641} \u{63a} \u{639} \u{647} \u{62e} \u{62d} \u{62c} \u{62f}",
        "{change} \u{634} \u{633} \u{64a} \u{628} \u{644} \u{627} \u{62a} \u{646} \u{645} \u{643} \u{637} \\",
        "{shift} \u{626} \u{621} \u{624} \u{631} \u{644}\u{627} \u{649} \u{629} \u{648} \u{632} \u{638} {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt_shift: &[
        "\u{651} ! @ # $ % ^ & * ) ( _ + {bksp}",
        "\u{64e} \u{64b} \u{64f} \u{64c} \u{644}\u{625} \u{625} \u{2018} \u{f7} \u{d7} \u{61b} < >",
        "{change} \u{650} \u{64d} ] [ \u{644}\u{623} \u{623} \u{640} \u{60c} / : \" |",
        "{shift} ~ \u{652} } { \u{644}\u{622} \u{622} \u{2019} , . \u{61f} {shift}",
        "{alt} &nbsp {alt}",
    ],
    transforms: &[],
};
