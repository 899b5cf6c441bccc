use super::LayoutDef;

pub(crate) const SPA: LayoutDef = LayoutDef {
    code: "spa",
    name: "Español",
    locale: "es",
    normal: &[
        "\u{ba} 1 2 3 4 5 6 7 8 9 0 ' \u{a1} {bksp}",
        "q w e r t y u i o p ` +",
        "{change} a s d f g h j k l \u{f1} \u{b4} \u{e7}",
        "{shift} z x c v b n m , . - {shift}",
        "{alt} &nbsp {alt}",
    ],
    shift: &[
        "\u{aa} ! \" \u{b7} $ % &amp; / ( ) = ? \u{bf} {bksp}",
        "Q W E R T Y U I O P ^ *",
        "{change} A S D F G H J K L \u{d1} \u{a8} \u{c7}",
        "{shift} Z X C V B N M ; : _ {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt: &[
        "\\ | @ # ~ \u{20ac} \u{ac} {} {} {} {} {} {} {bksp}",
        "{} {} \u{20ac} {} {} {} {} {} {} [ ] }",
        "{change} {} {} {} {} {} {} {} {} {} {} {} {",
        "{shift} {} {} {} {} {} {} {} {} {} {} {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt_shift: &[
        "\\ | @ # ~ \u{20ac} \u{ac} {} {} {} {} {} {} {bksp}",
        "{} {} \u{20ac} {} {} {} {} {} {} [ ] }",
        "{change} {} {} {} {} {} {} {} {} {} {} {} {",
        "{shift} {} {} {} {} {} {} {} {} {} {} {shift}",
        "{alt} &nbsp {alt}",
    ],
    transforms: &[
        ("`A", "\u{c0}"),
        ("\u{a8}A", "\u{c4}"),
        ("~A", "\u{c3}"),
        ("\u{b4}A", "\u{c1}"),
        ("^A", "\u{c2}"),
        ("\u{b4}C", "\u{106}"),
        ("^C", "\u{108}"),
        ("`E", "\u{c8}"),
        ("\u{a8}E", "\u{cb}"),
        ("~E", "\u{1ebc}"),
        ("\u{b4}E", "\u{c9}"),
        ("^E", "\u{ca}"),
        ("\u{b4}G", "\u{1f4}"),
        ("^G", "\u{11c}"),
        ("\u{a8}H", "\u{1e26}"),
        ("^H", "\u{124}"),
        ("`I", "\u{cc}"),
        ("\u{a8}I", "\u{cf}"),
        ("~I", "\u{128}"),
        ("\u{b4}I", "\u{cd}"),
        ("^I", "\u{ce}"),
        ("^J", "\u{134}"),
        ("\u{b4}K", "\u{1e30}"),
        ("\u{b4}L", "\u{139}"),
        ("\u{b4}M", "\u{1e3e}"),
        ("`N", "\u{1f8}"),
        ("~N", "\u{d1}"),
        ("\u{b4}N", "\u{143}"),
        ("`O", "\u{d2}"),
        ("\u{a8}O", "\u{d6}"),
        ("~O", "\u{d5}"),
        ("\u{b4}O", "\u{d3}"),
        ("^O", "\u{d4}"),
        ("\u{b4}P", "\u{1e54}"),
        ("\u{b4}R", "\u{154}"),
        ("\u{b4}S", "\u{15a}"),
        ("^S", "\u{15c}"),
        ("`U", "\u{d9}"),
        ("\u{a8}U", "\u{dc}"),
        ("~U", "\u{168}"),
        ("\u{b4}U", "\u{da}"),
        ("^U", "\u{db}"),
        ("~V", "\u{1e7c}"),
        ("`W", "\u{1e80}"),
        ("\u{a8}W", "\u{1e84}"),
        ("\u{b4}W", "\u{1e82}"),
        ("^W", "\u{174}"),
        ("\u{a8}X", "\u{1e8c}"),
        ("`Y", "\u{1ef2}"),
        ("\u{a8}Y", "\u{178}"),
        ("~Y", "\u{1ef8}"),
        ("\u{b4}Y", "\u{dd}"),
        ("^Y", "\u{176}"),
        ("\u{b4}Z", "\u{179}"),
        ("^Z", "\u{1e90}"),
        ("`a", "\u{e0}"),
        ("\u{a8}a", "\u{e4}"),
        ("~a", "\u{e3}"),
        ("\u{b4}a", "\u{e1}"),
        ("^a", "\u{e2}"),
        ("\u{b4}c", "\u{107}"),
        ("^c", "\u{109}"),
        ("`e", "\u{e8}"),
        ("\u{a8}e", "\u{eb}"),
        ("~e", "\u{1ebd}"),
        ("\u{b4}e", "\u{e9}"),
        ("^e", "\u{ea}"),
        ("\u{b4}g", "\u{1f5}"),
        ("^g", "\u{11d}"),
        ("\u{a8}h", "\u{1e27}"),
        ("^h", "\u{125}"),
        ("`i", "\u{ec}"),
        ("\u{a8}i", "\u{ef}"),
        ("~i", "\u{129}"),
        ("\u{b4}i", "\u{ed}"),
        ("^i", "\u{ee}"),
        ("^j", "\u{135}"),
        ("\u{b4}k", "\u{1e31}"),
        ("\u{b4}l", "\u{13a}"),
        ("\u{b4}m", "\u{1e3f}"),
        ("`n", "\u{1f9}"),
        ("~n", "\u{f1}"),
        ("\u{b4}n", "\u{144}"),
        ("`o", "\u{f2}"),
        ("\u{a8}o", "\u{f6}"),
        ("~o", "\u{f5}"),
        ("\u{b4}o", "\u{f3}"),
        ("^o", "\u{f4}"),
        ("\u{b4}p", "\u{1e55}"),
        ("\u{b4}r", "\u{155}"),
        ("\u{b4}s", "\u{15b}"),
        ("^s", "\u{15d}"),
        ("\u{a8}t", "\u{1e97}"),
        ("`u", "\u{f9}"),
        ("\u{a8}u", "\u{fc}"),
        ("~u", "\u{169}"),
        ("\u{b4}u", "\u{fa}"),
        ("^u", "\u{fb}"),
        ("~v", "\u{1e7d}"),
        ("`w", "\u{1e81}"),
        ("\u{a8}w", "\u{1e85}"),
        ("\u{b4}w", "\u{1e83}"),
        ("^w", "\u{175}"),
        ("\u{a8}x", "\u{1e8d}"),
        ("`y", "\u{1ef3}"),
        ("\u{a8}y", "\u{ff}"),
        ("~y", "\u{1ef9}"),
        ("\u{b4}y", "\u{fd}"),
        ("^y", "\u{177}"),
        ("\u{b4}z", "\u{17a}"),
        ("^z", "\u{1e91}"),
        ("\u{b4}\u{c7}", "\u{1e08}"),
        ("\u{b4}\u{e7}", "\u{1e09}"),
    ],
};
