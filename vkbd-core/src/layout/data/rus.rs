use super::LayoutDef;

pub(crate) const RUS: LayoutDef = LayoutDef {
    code: "rus",
    name: "русский",
    locale: "ru",
    normal: &[
        "\u{451} 1 2 3 4 5 6 7 8 9 0 - = {bksp}",
        "\u{439} \u{446} \u{443} \u{43a} \u{435} \u{43d} \u{433} \u{448} \u{449} \u{437} \u{445} \u{44a}",
        "{change} \u{444} \u{44b} \u{432} \u{430} \u{43f} \u{440} \u{43e} \u{43b} \u{434} \u{436} \u{44d} \\",
        "{shift} \u{44f} \u{447} \u{441} \u{43c} \u{438} \u{442} \u{44c} \u{431} \u{44e} . {shift}",
        "{alt} &nbsp {alt}",
    ],
    shift: &[
        "\u{401} ! \" \u{2116} ; % : ? * ( ) _ + {bksp}",
        "\u{419} \u{426} \u{423} \u{41a} \u{415} \u{41d} \u{413} \u{428} \u{429} \u{417} \u{425} \u{42a}",
        "{change} \u{424} \u{42b} \u{412} \u{410} \u{41f} \u{420} \u{41e} \u{41b} \u{414} \u{416} \u{42d} /",
        "{shift} \u{42f} \u{427} \u{421} \u{41c} \u{418} \u{422} \u{42c} \u{411} \u{42e} , {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt: &[
        "\u{463} {} {} {} {} {} {} {} {} {} {} {} = {bksp}",
        "\u{457} \u{479} \u{46b} \u{46d} \u{465} \u{4a3} \u{4af} \u{4e9} \u{455} \u{46f} [ ]",
        "{change} \u{473} \u{471} {} {} {} {} \u{461} \u{47f} \u{47b} \u{47d} {} \\",
        "{shift} \u{467} \u{469} {} {} \u{456} \u{475} \u{477} {} {} {} {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt_shift: &[
        "\u{462} {} {} {} {} {} {} {} {} {} {} {} + {bksp}",
        "\u{407} \u{478} \u{46a} \u{46c} \u{464} {} {} {} \u{405} \u{46e} { }",
        "{change} \u{472} \u{470} {} {} {} {} \u{460} \u{47e} \u{47a} \u{47c} {} |",
        "{shift} \u{466} \u{468} {} {} \u{406} \u{474} \u{476} {} {} {} {shift}",
        "{alt} &nbsp {alt}",
    ],
    transforms: &[],
};
