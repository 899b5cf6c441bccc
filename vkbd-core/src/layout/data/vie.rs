use super::LayoutDef;

pub(crate) const VIE: LayoutDef = LayoutDef {
    code: "vie",
    name: "Tiếng Việt",
    locale: "vi",
    normal: &[
        "` \u{103} \u{e2} \u{ea} \u{f4} \u{300} \u{309} \u{303} \u{301} \u{323} \u{111} - \u{20ab} {bksp}",
        "q w e r t y u i o p \u{1b0} \u{1a1}",
        "{change} a s d f g h j k l ; ' \\",
        "{shift} z x c v b n m , . / {shift}",
        "{alt} &nbsp {alt}",
    ],
    shift: &[
        "~ \u{102} \u{c2} \u{ca} \u{d4} \u{300} \u{309} \u{303} \u{301} \u{323} \u{110} _ + {bksp}",
        "Q W E R T Y U I O P \u{1af} \u{1a0}",
        "{change} A S D F G H J K L : \" |",
        "{shift} Z X C V B N M < > ? {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt: &[
        "` 1 2 3 4 5 6 7 8 9 0 - = {bksp}",
        "q w e r t y u i o p [ ]",
        "{change} a s d f g h j k l ; ' \\",
        "{shift} z x c v b n m , . / {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt_shift: &[
        "~ ! @ # $ % ^ & * ( ) _ + {bksp}",
        "Q W E R T Y U I O P [ ]",
        "{change} A S D F G H J K L ; ' \\",
        "{shift} Z X C V B N M , . / {shift}",
        "{alt} &nbsp {alt}",
    ],
    transforms: &[
        ("A\u{300}", "\u{c0}"),
        ("A\u{301}", "\u{c1}"),
        ("A\u{303}", "\u{c3}"),
        ("E\u{300}", "\u{c8}"),
        ("E\u{301}", "\u{c9}"),
        ("I\u{300}", "\u{cc}"),
        ("I\u{301}", "\u{cd}"),
        ("N\u{303}", "\u{d1}"),
        ("O\u{300}", "\u{d2}"),
        ("O\u{301}", "\u{d3}"),
        ("O\u{303}", "\u{d5}"),
        ("U\u{300}", "\u{d9}"),
        ("U\u{301}", "\u{da}"),
        ("Y\u{301}", "\u{dd}"),
        ("a\u{300}", "\u{e0}"),
        ("a\u{301}", "\u{e1}"),
        ("a\u{303}", "\u{e3}"),
        ("e\u{300}", "\u{e8}"),
        ("e\u{301}", "\u{e9}"),
        ("i\u{300}", "\u{ec}"),
        ("i\u{301}", "\u{ed}"),
        ("n\u{303}", "\u{f1}"),
        ("o\u{300}", "\u{f2}"),
        ("o\u{301}", "\u{f3}"),
        ("o\u{303}", "\u{f5}"),
        ("u\u{300}", "\u{f9}"),
        ("u\u{301}", "\u{fa}"),
        ("y\u{301}", "\u{fd}"),
        ("C\u{301}", "\u{106}"),
        ("c\u{301}", "\u{107}"),
        ("I\u{303}", "\u{128}"),
        ("i\u{303}", "\u{129}"),
        ("L\u{301}", "\u{139}"),
        ("l\u{301}", "\u{13a}"),
        ("N\u{301}", "\u{143}"),
        ("n\u{301}", "\u{144}"),
        ("R\u{301}", "\u{154}"),
        ("r\u{301}", "\u{155}"),
        ("S\u{301}", "\u{15a}"),
        ("s\u{301}", "\u{15b}"),
        ("U\u{303}", "\u{168}"),
        ("u\u{303}", "\u{169}"),
        ("Z\u{301}", "\u{179}"),
        ("z\u{301}", "\u{17a}"),
        ("G\u{301}", "\u{1f4}"),
        ("g\u{301}", "\u{1f5}"),
        ("N\u{300}", "\u{1f8}"),
        ("n\u{300}", "\u{1f9}"),
        ("B\u{323}", "\u{1e04}"),
        ("b\u{323}", "\u{1e05}"),
        ("D\u{323}", "\u{1e0c}"),
        ("d\u{323}", "\u{1e0d}"),
        ("H\u{323}", "\u{1e24}"),
        ("h\u{323}", "\u{1e25}"),
        ("K\u{301}", "\u{1e30}"),
        ("k\u{301}", "\u{1e31}"),
        ("K\u{323}", "\u{1e32}"),
        ("k\u{323}", "\u{1e33}"),
        ("L\u{323}", "\u{1e36}"),
        ("l\u{323}", "\u{1e37}"),
        ("M\u{301}", "\u{1e3e}"),
        ("m\u{301}", "\u{1e3f}"),
        ("M\u{323}", "\u{1e42}"),
        ("m\u{323}", "\u{1e43}"),
        ("N\u{323}", "\u{1e46}"),
        ("n\u{323}", "\u{1e47}"),
        ("P\u{301}", "\u{1e54}"),
        ("p\u{301}", "\u{1e55}"),
        ("R\u{323}", "\u{1e5a}"),
        ("r\u{323}", "\u{1e5b}"),
        ("S\u{323}", "\u{1e62}"),
        ("s\u{323}", "\u{1e63}"),
        ("T\u{323}", "\u{1e6c}"),
        ("t\u{323}", "\u{1e6d}"),
        ("V\u{303}", "\u{1e7c}"),
        ("v\u{303}", "\u{1e7d}"),
        ("V\u{323}", "\u{1e7e}"),
        ("v\u{323}", "\u{1e7f}"),
        ("W\u{300}", "\u{1e80}"),
        ("w\u{300}", "\u{1e81}"),
        ("W\u{301}", "\u{1e82}"),
        ("w\u{301}", "\u{1e83}"),
        ("W\u{323}", "\u{1e88}"),
        ("w\u{323}", "\u{1e89}"),
        ("Z\u{323}", "\u{1e92}"),
        ("z\u{323}", "\u{1e93}"),
        ("A\u{323}", "\u{1ea0}"),
        ("a\u{323}", "\u{1ea1}"),
        ("A\u{309}", "\u{1ea2}"),
        ("a\u{309}", "\u{1ea3}"),
        ("\u{c2}\u{301}", "\u{1ea4}"),
        ("\u{e2}\u{301}", "\u{1ea5}"),
        ("\u{c2}\u{300}", "\u{1ea6}"),
        ("\u{e2}\u{300}", "\u{1ea7}"),
        ("\u{c2}\u{309}", "\u{1ea8}"),
        ("\u{e2}\u{309}", "\u{1ea9}"),
        ("\u{c2}\u{303}", "\u{1eaa}"),
        ("\u{e2}\u{303}", "\u{1eab}"),
        ("\u{102}\u{301}", "\u{1eae}"),
        ("\u{103}\u{301}", "\u{1eaf}"),
        ("\u{102}\u{300}", "\u{1eb0}"),
        ("\u{103}\u{300}", "\u{1eb1}"),
        ("\u{102}\u{309}", "\u{1eb2}"),
        ("\u{103}\u{309}", "\u{1eb3}"),
        ("\u{102}\u{303}", "\u{1eb4}"),
        ("\u{103}\u{303}", "\u{1eb5}"),
        ("E\u{323}", "\u{1eb8}"),
        ("e\u{323}", "\u{1eb9}"),
        ("E\u{309}", "\u{1eba}"),
        ("e\u{309}", "\u{1ebb}"),
        ("E\u{303}", "\u{1ebc}"),
        ("e\u{303}", "\u{1ebd}"),
        ("\u{ca}\u{301}", "\u{1ebe}"),
        ("\u{ea}\u{301}", "\u{1ebf}"),
        ("\u{ca}\u{300}", "\u{1ec0}"),
        ("\u{ea}\u{300}", "\u{1ec1}"),
        ("\u{ca}\u{309}", "\u{1ec2}"),
        ("\u{ea}\u{309}", "\u{1ec3}"),
        ("\u{ca}\u{303}", "\u{1ec4}"),
        ("\u{ea}\u{303}", "\u{1ec5}"),
        ("I\u{309}", "\u{1ec8}"),
        ("i\u{309}", "\u{1ec9}"),
        ("I\u{323}", "\u{1eca}"),
        ("i\u{323}", "\u{1ecb}"),
        ("O\u{323}", "\u{1ecc}"),
        ("o\u{323}", "\u{1ecd}"),
        ("O\u{309}", "\u{1ece}"),
        ("o\u{309}", "\u{1ecf}"),
        ("\u{d4}\u{301}", "\u{1ed0}"),
        ("\u{f4}\u{301}", "\u{1ed1}"),
        ("\u{d4}\u{300}", "\u{1ed2}"),
        ("\u{f4}\u{300}", "\u{1ed3}"),
        ("\u{d4}\u{309}", "\u{1ed4}"),
        ("\u{f4}\u{309}", "\u{1ed5}"),
        ("\u{d4}\u{303}", "\u{1ed6}"),
        ("\u{f4}\u{303}", "\u{1ed7}"),
        ("\u{1a0}\u{301}", "\u{1eda}"),
        ("\u{1a1}\u{301}", "\u{1edb}"),
        ("\u{1a0}\u{300}", "\u{1edc}"),
        ("\u{1a1}\u{300}", "\u{1edd}"),
        ("\u{1a0}\u{309}", "\u{1ede}"),
        ("\u{1a1}\u{309}", "\u{1edf}"),
        ("\u{1a0}\u{303}", "\u{1ee0}"),
        ("\u{1a1}\u{303}", "\u{1ee1}"),
        ("\u{1a0}\u{323}", "\u{1ee2}"),
        ("\u{1a1}\u{323}", "\u{1ee3}"),
        ("U\u{323}", "\u{1ee4}"),
        ("u\u{323}", "\u{1ee5}"),
        ("U\u{309}", "\u{1ee6}"),
        ("u\u{309}", "\u{1ee7}"),
        ("\u{1af}\u{301}", "\u{1ee8}"),
        ("\u{1b0}\u{301}", "\u{1ee9}"),
        ("\u{1af}\u{300}", "\u{1eea}"),
        ("\u{1b0}\u{300}", "\u{1eeb}"),
        ("\u{1af}\u{309}", "\u{1eec}"),
        ("\u{1b0}\u{309}", "\u{1eed}"),
        ("\u{1af}\u{303}", "\u{1eee}"),
        ("\u{1b0}\u{303}", "\u{1eef}"),
        ("\u{1af}\u{323}", "\u{1ef0}"),
        ("\u{1b0}\u{323}", "\u{1ef1}"),
        ("Y\u{300}", "\u{1ef2}"),
        ("y\u{300}", "\u{1ef3}"),
        ("Y\u{323}", "\u{1ef4}"),
        ("y\u{323}", "\u{1ef5}"),
        ("Y\u{309}", "\u{1ef6}"),
        ("y\u{309}", "\u{1ef7}"),
        ("Y\u{303}", "\u{1ef8}"),
        ("y\u{303}", "\u{1ef9}"),
    ],
};
