// Precomputed tables of multiples of the generator, in (x+y, y-x, 2*d*t)
// format (affine, implicit Z = 1).

use super::{PointDuif, NPOINTS_DOUBLEMUL_WP, VPOINTS_FIXEDBASE, V_FIXEDBASE};
use crate::field::GF254;

// Comb table for fixed-base multiplication (W = 5, V = 5). There are V
// consecutive blocks of 2^(W-1) = 16 points; entry u of block j is
// 2^(j*E) * (1 + sum_{i=0..3} u_i * 2^((i+1)*D)) * G, with u_i the bits
// of u (D = 50, E = 10).
pub(crate) static FIXED_BASE_TABLE: [PointDuif; V_FIXEDBASE * VPOINTS_FIXEDBASE] = [
    // comb 0
    PointDuif { ypx: GF254::w64le(0xE18A34F3A703E631, 0x287460BF1D502B5F,
                                 0xE02E62F7E4F90353, 0x0C3BA0378B86ACDE),
                ymx: GF254::w64le(0x90BF0F98B0937EDC, 0x740B7C7824F0C555,
                                 0xB321239123A01366, 0x4FFCF5B93A9557A5),
                t2d: GF254::w64le(0x297AFCCBABDA42BB, 0x5948D137556C97C6,
                                 0xA8189A393330684C, 0x0CAF2B720A341F27) },
    PointDuif { ypx: GF254::w64le(0x3A8BA018FD188787, 0x5546128188DD12A8,
                                 0xB0B3CC33C09F9B77, 0x1BAEEAF8B84D2049),
                ymx: GF254::w64le(0x006425A611FAF900, 0x18F7CD12E1A6F789,
                                 0x6DCCF09A12556066, 0x448E05EEACE7B6EB),
                t2d: GF254::w64le(0xBF2F33689D2829B0, 0x6D911DCB2957BDB4,
                                 0x9F2353DBDC3C03EE, 0x06C54305BABEE501) },
    PointDuif { ypx: GF254::w64le(0x2EAF45713DAFA125, 0x72963058648A364D,
                                 0x61B7771F9D313EF2, 0x4F41C7F8BFE2B069),
                ymx: GF254::w64le(0x408623AE599790AC, 0x4D33858644330A42,
                                 0xFC5696649CDD7487, 0x74DF72E0E598E114),
                t2d: GF254::w64le(0xC9A06325913C110B, 0x076BD4115FE4B0D8,
                                 0x76619E65D6BFF3D9, 0x249240147CEE3A08) },
    PointDuif { ypx: GF254::w64le(0xD695B96148965A73, 0x28AAC8A28829F706,
                                 0x41F1C05329F7A57B, 0x441CA9E89F03E00E),
                ymx: GF254::w64le(0xE1AA38AB8BF7241E, 0x58F28CAFC832B7F4,
                                 0xCADAF8B8FA5400C6, 0x34B6D106284E863E),
                t2d: GF254::w64le(0xF5498CAB3AF15097, 0x6DBE7790017D9C49,
                                 0x63BF76A81448E8BC, 0x6371925BF23AE006) },
    PointDuif { ypx: GF254::w64le(0xC5E2C721BDED81FA, 0x4EDE70EED68056AB,
                                 0x8F3CD9B5B4975810, 0x4752FD192F0A9AA8),
                ymx: GF254::w64le(0x318794EB1F734414, 0x11DDF7D2C8468662,
                                 0x2613B06F72B1A34E, 0x465575B37AB06770),
                t2d: GF254::w64le(0x40B9845F82638D2B, 0x48894050790298CE,
                                 0xBEDB93A501B4F131, 0x04F3560D2889B2FB) },
    PointDuif { ypx: GF254::w64le(0x457DD875115B278B, 0x56F25EE54D92858A,
                                 0x92D4C1CDCE0C977E, 0x078FCA4187D74996),
                ymx: GF254::w64le(0x3BBB2DED76CC22A1, 0x117B28853DDC2BF6,
                                 0x43F3767CB9C2BAA2, 0x73079E25E0EA8A8F),
                t2d: GF254::w64le(0x0177992B5A15796D, 0x2E77721480D9EF92,
                                 0xBE09883567372916, 0x258F176B7AF7576D) },
    PointDuif { ypx: GF254::w64le(0x308338FD6168391B, 0x7285925F9A7353A4,
                                 0x862C0FD04FE85114, 0x53259EE7423AEB51),
                ymx: GF254::w64le(0xFE0031A84B3B1A68, 0x1A4F1D661FA071FC,
                                 0x2DDD54168DC928A7, 0x60185C1ADF196A6A),
                t2d: GF254::w64le(0x49809717DC6DA9B4, 0x6062094B4DCFFC03,
                                 0xA41EA6FA05FA7E8D, 0x4A4FE06F277148A0) },
    PointDuif { ypx: GF254::w64le(0x7BB253A9EE9E80F0, 0x419A928BCCB11733,
                                 0x84323BE66A9A039E, 0x01B2D1AE972814BB),
                ymx: GF254::w64le(0xA7588584D3051231, 0x54DF1E20CC979DD7,
                                 0x91D906FE3E2F22DD, 0x4E36E9975FDF1A0F),
                t2d: GF254::w64le(0xD81871746B747634, 0x3E5E31BAEEE13433,
                                 0xE4DA80979573BAA3, 0x4B852AD97CFE77C6) },
    PointDuif { ypx: GF254::w64le(0xE08B346714418B9E, 0x283D719B2FE6EF88,
                                 0xB7339D2DE45C180B, 0x75ACFCEF11D2D5C8),
                ymx: GF254::w64le(0x8F40777A8C561876, 0x0C54AC40A7134C4B,
                                 0xB92E287D66BAEE08, 0x6F357E5006A188BF),
                t2d: GF254::w64le(0xC5903319ED1E6971, 0x747C45EF91DAFD40,
                                 0xDE4086A91D2F816E, 0x5DCB27EDB3B3EF7D) },
    PointDuif { ypx: GF254::w64le(0x43FDC46CFA1DD2EE, 0x51551F9F70966498,
                                 0xB54534F761ED9BDC, 0x453455B3073FB07F),
                ymx: GF254::w64le(0xF24773E383CAB70B, 0x679BE25E758CF4DF,
                                 0xDA17EDF2943EEE29, 0x3DC9E5B8D6DC0F66),
                t2d: GF254::w64le(0x56A50CBA413FB75B, 0x1E65315BC5A8537F,
                                 0x5FF90242802C7213, 0x73C9D8C8F425252E) },
    PointDuif { ypx: GF254::w64le(0x3C637B8633198C8F, 0x534F84B3ED414F33,
                                 0xAD313E72DEDD6902, 0x5ED57E941CDF33AF),
                ymx: GF254::w64le(0x5A6FE01D2A57306E, 0x73B63DEA344713F9,
                                 0x39CB70570F1C2BF3, 0x2DF8C6E49F1A18DB),
                t2d: GF254::w64le(0x661BC349677797E4, 0x501AE7CBBEBE9062,
                                 0x5B52A88DE8959643, 0x0372752811C01D51) },
    PointDuif { ypx: GF254::w64le(0x010C57A2301BB928, 0x378B317155554FC6,
                                 0xF883FA4229A02CF1, 0x5F0047B850D7DB29),
                ymx: GF254::w64le(0x4D247AE328402DAA, 0x0D030627A850A2BC,
                                 0xB4E65D9A88A443F5, 0x6EC9686B2D6DB089),
                t2d: GF254::w64le(0xDE202E08FEA1D987, 0x5C64E1D3F28D7600,
                                 0x157D17BEF661BFB7, 0x56392D36DD75334C) },
    PointDuif { ypx: GF254::w64le(0xE25478D8BD19155C, 0x146D4F2D3D336AFD,
                                 0x9BFBE00BF94E15E8, 0x2B185A9A6ADF10C0),
                ymx: GF254::w64le(0x926527B3ED52AB7B, 0x67997E1473101E80,
                                 0xB58F4FF4947CC541, 0x36F800C7FAC99A7A),
                t2d: GF254::w64le(0xD0302E32400456D9, 0x4372E43640BC697B,
                                 0x9144CABB4750D898, 0x75D25AFAC9A23CBF) },
    PointDuif { ypx: GF254::w64le(0x794591767655CBFE, 0x74DB216617FC4B07,
                                 0x7057B2242566D0C9, 0x1D543B5908417B23),
                ymx: GF254::w64le(0x19C280B444428783, 0x352309FD8B6CC3EF,
                                 0x37833D6AC068AE72, 0x4EC0671A23C019F4),
                t2d: GF254::w64le(0x9D9836E1A3D05BB5, 0x44FE1ADFF224EFE3,
                                 0xA296BC3CE57EFB4A, 0x2EFEC86835A14150) },
    PointDuif { ypx: GF254::w64le(0x2FE19C09FB194BCA, 0x18CC07D3953CD206,
                                 0x5BDFF217C9C0B9E0, 0x671AA756581ABCEE),
                ymx: GF254::w64le(0xE1CC33AE28F7D1A2, 0x1B6F254937A0A3FE,
                                 0x51503D1665BABB83, 0x74B95636D5889211),
                t2d: GF254::w64le(0xBDB97AE4EA96F869, 0x1507CE189E2510BD,
                                 0x796E4D54FAB93B13, 0x6A81765F05960929) },
    PointDuif { ypx: GF254::w64le(0x2E940521E5A833ED, 0x3BDEA532B245F644,
                                 0xBEA76975FFD52693, 0x64B94848BA6D4ED6),
                ymx: GF254::w64le(0x9DB52D0194E33EC7, 0x71CF65DA55639F25,
                                 0xEDE73B1FDB5A8138, 0x12E4D13B6C62DC22),
                t2d: GF254::w64le(0x9D19B0C265185517, 0x77A011D257B5FDD0,
                                 0x1FEDC5CAAECD84E4, 0x46844E151E3492D1) },
    // comb 1
    PointDuif { ypx: GF254::w64le(0x7A423A31904220DF, 0x5B3165C747E8F099,
                                 0x1C665EEADF35E22E, 0x7802B556FC45595B),
                ymx: GF254::w64le(0x85A2DEF4015BD2DE, 0x17F2AB87957166AD,
                                 0x19CF6D352060C1E5, 0x122A7AD1BE408E6A),
                t2d: GF254::w64le(0x5B79BBC8645BF766, 0x20FB009D4D0ADACF,
                                 0x97526A272BA28538, 0x7041B4E90D420BDE) },
    PointDuif { ypx: GF254::w64le(0x3B30113358DAB057, 0x3D398B66F0D24243,
                                 0x91A5999A03CD4708, 0x1EAE2409CD938096),
                ymx: GF254::w64le(0x66DD6B604C36108C, 0x1713083789081968,
                                 0x57CAD6917125DCFD, 0x34B06CB89704F1CA),
                t2d: GF254::w64le(0xDCAFE8E71F35ABF2, 0x698331198D544DB9,
                                 0x6287676643AF075B, 0x200950E5559D2B6D) },
    PointDuif { ypx: GF254::w64le(0xD4F63FC3ECDD9074, 0x7473317142AC13A2,
                                 0x96B0030805319356, 0x2C20FFE0244378BA),
                ymx: GF254::w64le(0x4889511AD26AC01A, 0x4EE327219997FCF6,
                                 0x15FFE6E70F0BF8EA, 0x6B617FB4A6D0A6D7),
                t2d: GF254::w64le(0x4916DCA1C52F7324, 0x3C8269F086468277,
                                 0xC24210C4C837E04B, 0x4E480B4F915A542C) },
    PointDuif { ypx: GF254::w64le(0xC5FEF3B09A7FE35E, 0x31A501DE44FD84B2,
                                 0x79F29E4940A407B9, 0x0BA7E03CA5CCE5AB),
                ymx: GF254::w64le(0xA7A8B2058A74D8EA, 0x46F4C7810E26DADC,
                                 0x46171ACE94A1128A, 0x44DB55025495A811),
                t2d: GF254::w64le(0x7F889E1A4BF18D5C, 0x4D4F172A43F306B2,
                                 0x33A99766BB1CFFAD, 0x6254775924D39ACA) },
    PointDuif { ypx: GF254::w64le(0xD855230EC225136E, 0x1C544DD078D9211D,
                                 0x12FE9969F63F63BA, 0x069AF1DC949DD382),
                ymx: GF254::w64le(0x305BCF40CFE5C256, 0x63AE90924BBBB595,
                                 0xE451097793B7DE06, 0x09780CF39FC0043E),
                t2d: GF254::w64le(0x827AF8E7EB798871, 0x3ACE8A6C77577A37,
                                 0x79DF061332E055BA, 0x561DC07AAACEA92B) },
    PointDuif { ypx: GF254::w64le(0x7E4422D9820D2673, 0x6B85DF83E0AF5348,
                                 0x1F151AC1DED8526B, 0x35EAD8E5157142BD),
                ymx: GF254::w64le(0x6DA6EF6C33C79DD4, 0x5F2EA04D2594FDE4,
                                 0x91037D0CC027D5FA, 0x53B5401007B0331B),
                t2d: GF254::w64le(0x810F198A3D4BA5A3, 0x4463BD259BA94195,
                                 0x32B894ACEC2ACF9E, 0x78711761D64349CE) },
    PointDuif { ypx: GF254::w64le(0x253AE1B3F51FE211, 0x409E4B3F535B6463,
                                 0x3A236D10DA5E49DE, 0x19D2B1029C21336A),
                ymx: GF254::w64le(0x2835F40436AADD90, 0x0942A31505190B19,
                                 0xC189131876828279, 0x3AFE96C3CA8E1F9C),
                t2d: GF254::w64le(0x9F1801B491230693, 0x39E28DB8625FD091,
                                 0x9FAB50355DD44C8E, 0x145155DA729B280D) },
    PointDuif { ypx: GF254::w64le(0xD3CCF8101D4D76D5, 0x5A0FAA1A8C2B6C68,
                                 0x3CC66C84CB54EA8A, 0x51052CE3F566C773),
                ymx: GF254::w64le(0x3BEE14DE65AE9FF5, 0x7586118A01CCF024,
                                 0x089E791C896BF15E, 0x35FF022D261D93D6),
                t2d: GF254::w64le(0xCD3CE13D8F7D1CF9, 0x4F1DE98F95B7B8F6,
                                 0x51E68A2462DC41B4, 0x61AD9E3C23F6DD29) },
    PointDuif { ypx: GF254::w64le(0x584FEA6480EBDB51, 0x5D52FE073F9DECF3,
                                 0x9AFE483EADF336D5, 0x1DFA03C980B1696A),
                ymx: GF254::w64le(0x55F73D47FF819A19, 0x697BF55D361100ED,
                                 0xDED4804446399419, 0x618C94467FCE259F),
                t2d: GF254::w64le(0xF2597FF1F08EF50C, 0x07C935B98DD933C0,
                                 0xBB758CBC78DED5F6, 0x1E9A0D06AF13148F) },
    PointDuif { ypx: GF254::w64le(0x879CE1457F4CD4DB, 0x28396CA1962D4994,
                                 0xF5095A3DC57605C3, 0x1E570F3DA4C527B1),
                ymx: GF254::w64le(0x2AF69A3904935787, 0x591EE376FDD01CCE,
                                 0xF77B58DF88BC8633, 0x5464D651B2F395D1),
                t2d: GF254::w64le(0xAFBC096B1E9A86AE, 0x6CE2DF4BF65B6B28,
                                 0x3B3A828D2E9D3E08, 0x6382011D8D2D66D0) },
    PointDuif { ypx: GF254::w64le(0x94987CA64D3D193D, 0x50DDF70D3B6D56AF,
                                 0x8D5DF67CC8AD15A9, 0x39208098BC5B1F92),
                ymx: GF254::w64le(0xCE99F520DFD5A4FB, 0x323BBC87B86A7BA9,
                                 0xE13F88A8D803C789, 0x56FFDCBDF2200055),
                t2d: GF254::w64le(0x3AFF0DA31B24C72D, 0x70011566460C0C16,
                                 0x76F7B7F53AC46A13, 0x1C069BFEB7077BC2) },
    PointDuif { ypx: GF254::w64le(0x8F47193CA14A3C36, 0x6D73E34AF088DE3D,
                                 0x634B2BD9317D6634, 0x5B404738B77F1EC8),
                ymx: GF254::w64le(0xF34FABB71CA1CB1D, 0x054ABBCACA546A46,
                                 0xE8CDCADD08EDA660, 0x6971ABBF958BDEF1),
                t2d: GF254::w64le(0x41338557DDDB4EAF, 0x1E158585B079B67C,
                                 0xD2270474CFA26068, 0x53B36D32B3CEA469) },
    PointDuif { ypx: GF254::w64le(0x011523C16C543D08, 0x4668E92C5F73314E,
                                 0xBAEF3EBE4117ACD1, 0x04037D1AA713931A),
                ymx: GF254::w64le(0x68E118E4E390C68D, 0x6B80CD55A44C1575,
                                 0x7307EA8A5729C032, 0x5CC5475FEEE99AB2),
                t2d: GF254::w64le(0x34450E424C14AC75, 0x3F09157E5DB3DCD8,
                                 0x62CE2B1B50588052, 0x27A899C54E652F8F) },
    PointDuif { ypx: GF254::w64le(0x0ACD039F2FC2A5ED, 0x4B4044DDD5813EEC,
                                 0xC04D189E90A75958, 0x242551BCE71D33A1),
                ymx: GF254::w64le(0xD95AF96B51F87F05, 0x02988820F809D815,
                                 0xB27F65F73B9483C5, 0x2EF60745F4364B43),
                t2d: GF254::w64le(0xCB66BDC93F4FB8B9, 0x2B86C9B48756BB8A,
                                 0xF8EBDAE09B9867A1, 0x441E70184E6FE9AA) },
    PointDuif { ypx: GF254::w64le(0xFDC2530330CC1289, 0x47D8D65A8B4D6992,
                                 0x8C03B6FA30AE74BE, 0x1CA8693CC3BD99D5),
                ymx: GF254::w64le(0x699EB1511018F2A6, 0x3DA04764D9F4FFF5,
                                 0x361720433D3AAB59, 0x2FA911612CB857FF),
                t2d: GF254::w64le(0xA4057DA10C2F1CAC, 0x48A219B933A5C619,
                                 0x42341020D15F0BC5, 0x73F8895046A09DAD) },
    PointDuif { ypx: GF254::w64le(0x1BAD5312C67421B8, 0x4194771B368E622E,
                                 0x8CC71A79E44E0DFF, 0x4B4564E45467F1C2),
                ymx: GF254::w64le(0x7759F16AAFE52093, 0x391B71DCD75FBEA9,
                                 0x2A1C0694AB4EF798, 0x023087545444130D),
                t2d: GF254::w64le(0x4B7AE1FFCFAA1AA1, 0x64E26F32D73361E7,
                                 0x8DA47038BD0B54B9, 0x148CFA6FEAECEE15) },
    // comb 2
    PointDuif { ypx: GF254::w64le(0x3756D4D479C2CC3D, 0x25D44EA8D31543DE,
                                 0xD82C8BEF26BB2C43, 0x2C2047033D27F37F),
                ymx: GF254::w64le(0x5BD33D9837DAD260, 0x77943117A3383B7D,
                                 0x12071D697EA583F2, 0x3C7C41272A225BF2),
                t2d: GF254::w64le(0x92EBBDFAF1F03AD3, 0x5D61030C68B63704,
                                 0xCA6E2853BAEE75D1, 0x12404B34771A3636) },
    PointDuif { ypx: GF254::w64le(0xBE13C46326667E4F, 0x2BD261916F9BE3B0,
                                 0x86E3F8CBADC80F89, 0x74520D8A1794CB48),
                ymx: GF254::w64le(0x1E15C745024CF97E, 0x5CEE741E1E53EB02,
                                 0x8D088DE0AF99CDA1, 0x625812961CC0862C),
                t2d: GF254::w64le(0x4313437321C0E934, 0x60BBC768C424F7A4,
                                 0xABA71FBF3C10E143, 0x37B8EA9F14A915B8) },
    PointDuif { ypx: GF254::w64le(0x8D96EC65C40213FF, 0x74A08828FF77845C,
                                 0xBEDB7194DAF607A3, 0x17E86671161C8706),
                ymx: GF254::w64le(0xACEB98E0524059CF, 0x68552AC494916F09,
                                 0x4CD2971BAF1B3C47, 0x68442EBCDDE21B70),
                t2d: GF254::w64le(0x19629B8C0E867595, 0x6A6955D3635FA47A,
                                 0x6FAB45E0F2E393AD, 0x66DD3EF4FCF050C4) },
    PointDuif { ypx: GF254::w64le(0xBB0B7ABCFDDC7DF1, 0x14EB5B751B0BCF9C,
                                 0x1CF79F9CA2FD411D, 0x5C496F73FFF0600A),
                ymx: GF254::w64le(0x49648D8555426D70, 0x46C1016A2322D8A9,
                                 0xB57FDB870D9B6D4F, 0x609EB65209DDB633),
                t2d: GF254::w64le(0xE70F9166BEDC82C5, 0x772FB5B5C8AFAF27,
                                 0x79A294D9B0227A20, 0x7F75B141112DBC8D) },
    PointDuif { ypx: GF254::w64le(0x98D1C7F88E070020, 0x5953D0AAC48217B1,
                                 0xE28253EBE15F33FF, 0x267D1DC11E614C45),
                ymx: GF254::w64le(0xBE64F50AB99E2246, 0x4EAAAB5C82FE5495,
                                 0x927D5AC07E60BED0, 0x67D3786DE6AA1B4D),
                t2d: GF254::w64le(0xA71962BF0F6E2945, 0x63D93844A35EEA9B,
                                 0xB34228C7D26640AC, 0x169C38D2EB28F5A1) },
    PointDuif { ypx: GF254::w64le(0x4B7972B33439DC22, 0x71478457CDAA1E14,
                                 0x5226E125EC1D58C7, 0x669D8796E78FD4F1),
                ymx: GF254::w64le(0x750DD1AAAA44A07F, 0x327C62B55AEBBECF,
                                 0x006B8E95B54FBD25, 0x2AB3F95D01EB364E),
                t2d: GF254::w64le(0xFCBE5080C0D5E196, 0x2A1B9BD75A57E725,
                                 0x1D2B2B6758139B5D, 0x751CF4AF849B7A73) },
    PointDuif { ypx: GF254::w64le(0x164A7D2E337D00A5, 0x00CEE3A4CB83A4BC,
                                 0x3498E0366DBE28F9, 0x053D899148D28502),
                ymx: GF254::w64le(0x01665D64CAB0FB69, 0x4A99132208D68E74,
                                 0xBA44BBD4BD3F915D, 0x1D34B0F9172122BB),
                t2d: GF254::w64le(0x5D114DC729E8A9F3, 0x08E7A43DD5334B60,
                                 0x28DB8E9232F0F3E8, 0x5CB7BE1B80264F62) },
    PointDuif { ypx: GF254::w64le(0x9AF2C78782508F23, 0x336AE7CCF7E3A1B2,
                                 0x7FE2D4EE2DD194BE, 0x573D2E1B2B8A6872),
                ymx: GF254::w64le(0x3332EA3363B2EA36, 0x200BC1375B1F4243,
                                 0x65C47C8C06B3260D, 0x42021FCA53995C5E),
                t2d: GF254::w64le(0x2F7E6CF49BB19946, 0x311FBA6A23196D2C,
                                 0xC30C13B62BE0D70D, 0x61EEAC142711B0DC) },
    PointDuif { ypx: GF254::w64le(0x88526996597D35D4, 0x70169BCBE6BD21D7,
                                 0xA0F1B2D0AD29A510, 0x2ADE531472C1B94D),
                ymx: GF254::w64le(0x11E320DC189873E7, 0x2D2A1794E85CDB38,
                                 0xA0A8C453A6F621E3, 0x4B06D5B54525F6F7),
                t2d: GF254::w64le(0xF42916691848EC1C, 0x1D4216555D578730,
                                 0xF8C60DA7290A5B4E, 0x66DD9F39A1F3565F) },
    PointDuif { ypx: GF254::w64le(0x55AC29D937B474A0, 0x4291967A4A369EE4,
                                 0x918DACAA12E6BC89, 0x3D46E8900651C310),
                ymx: GF254::w64le(0xAF055430A00E90B1, 0x16F62BF56DA5CA39,
                                 0x1A021C33488C51E6, 0x0D64DADF63FBBCD5),
                t2d: GF254::w64le(0x0918ECE59DBFEA7C, 0x3B3319D7DD74203A,
                                 0x1D88545B8B9FA90C, 0x13B792DC908C59E6) },
    PointDuif { ypx: GF254::w64le(0x0A2D939A9C3D0979, 0x321A5DBEB74BF127,
                                 0x5E5947FFF66D8470, 0x22EC9ECAFD26BC99),
                ymx: GF254::w64le(0xDE17CA8293B10536, 0x593F56C0559DD846,
                                 0x1148373375485023, 0x23C6B0FDF7448B1C),
                t2d: GF254::w64le(0x377904458A27804F, 0x573E91962726EA70,
                                 0x35E1B24F3235AC70, 0x51BA082049F4F85E) },
    PointDuif { ypx: GF254::w64le(0x4BC4918160D47194, 0x5D29A21E3308E1DD,
                                 0x7E15894B3E6E4E33, 0x50DBBD2F4F31D0FB),
                ymx: GF254::w64le(0xEF248BD235A9C9DE, 0x3418ADD21B634710,
                                 0x96C7233A52363BD2, 0x7C8414AD9A08C99F),
                t2d: GF254::w64le(0xBC6ACB4A54E6C05C, 0x5729021A1193579A,
                                 0x0627C3E00B08FA1C, 0x3D0B4FF9E17C2A73) },
    PointDuif { ypx: GF254::w64le(0xD507E8755990317F, 0x75B27BB3BC7BFE48,
                                 0x44A80F2C6CE651F5, 0x7B9795FC1B706E46),
                ymx: GF254::w64le(0x9DE75BDEFDF9A640, 0x75ADE50ABABFFAA8,
                                 0xCE0AB116870889A0, 0x6F3DDCFCDD59EC6C),
                t2d: GF254::w64le(0x6E36833588DE0674, 0x291D1129EA28A073,
                                 0xF8B8E53864884D61, 0x706EF8F1AE854D76) },
    PointDuif { ypx: GF254::w64le(0x137A8C6583753069, 0x01E45F1CC620F966,
                                 0xE28E1FF82F76C7BA, 0x36D29EACE3E89C54),
                ymx: GF254::w64le(0x83379F157F0B49CB, 0x65E9C39E2BACB937,
                                 0x9B323C45070CDA3E, 0x16E02F31AB7E2DE5),
                t2d: GF254::w64le(0x53BCF346635122B7, 0x1FD7E207D6C2DE09,
                                 0x3A5F5F94EA1E57AC, 0x0CBA06E8D0F0B4DF) },
    PointDuif { ypx: GF254::w64le(0x70B440C387A9C392, 0x1E7DC143DEE1D800,
                                 0x5498BA6D7239912B, 0x332870A017182D14),
                ymx: GF254::w64le(0x6BE306FC672D794C, 0x2C2CE211245B2B4E,
                                 0x109B722C8D2BA79F, 0x268520FA9C5F727A),
                t2d: GF254::w64le(0x515B300524FE78EE, 0x736201ECCBAEA698,
                                 0x4608AC113210BF78, 0x32D8FD919C441843) },
    PointDuif { ypx: GF254::w64le(0xC9557E1B04B8F2D8, 0x775437F798DC7459,
                                 0x1200F5585BA417F5, 0x2E00EC5F3E7AD304),
                ymx: GF254::w64le(0xFC873D5F2B446288, 0x32270A93624876E4,
                                 0xC646A47C08789B22, 0x2370D9FE925616BE),
                t2d: GF254::w64le(0x430AFA3619E671C4, 0x156468CEAC1F5FB2,
                                 0x3B84DEC2F2417635, 0x31140E9017C0E58F) },
    // comb 3
    PointDuif { ypx: GF254::w64le(0x5C85F88CCB7443FA, 0x0DA75F5D64D864AC,
                                 0x295FF44871B0FB84, 0x1B79E10BAD3336C3),
                ymx: GF254::w64le(0xFFDF9942DD2977B3, 0x4C1B198D0F9A1A23,
                                 0xBA778A24C112864E, 0x74F66897F26D48D0),
                t2d: GF254::w64le(0x3FD5C06E867AB611, 0x4B98CE33FF7878B9,
                                 0xF7DB4DCE75CB9165, 0x11665AA099EC5163) },
    PointDuif { ypx: GF254::w64le(0x2A498F16AE7118B9, 0x265EC3DBB4EB509A,
                                 0x3DA4230668CE2C86, 0x36E62BAAB2E33385),
                ymx: GF254::w64le(0x99507D4A79AB4478, 0x25BFB2FC411E8875,
                                 0xD7AC1EC933022CE1, 0x23D341AE033D0466),
                t2d: GF254::w64le(0xD295B465E962BC00, 0x23D0211BA2D73180,
                                 0xA03CCD7AFF922D4D, 0x1E767148DE301514) },
    PointDuif { ypx: GF254::w64le(0xC241AB36A894EFAB, 0x1C9FC2F343FC1E58,
                                 0xCA3B96562BD27A87, 0x53623E2285DD7015),
                ymx: GF254::w64le(0x557411F01C219420, 0x19265577096B42F9,
                                 0xD3312D941B23592F, 0x30A9A9A1C3C51C06),
                t2d: GF254::w64le(0x3D89B0B3EA6E8F79, 0x7EAB751DC5C77CB2,
                                 0xC0A9B186E6DF6E36, 0x4F844D583F155694) },
    PointDuif { ypx: GF254::w64le(0x419018232793DFFA, 0x2ADD440B6BD3854D,
                                 0xD55480F131DF6E32, 0x318CE3846AE3E417),
                ymx: GF254::w64le(0x0565062D1A0984F4, 0x6EBAEC63D2BFF9F6,
                                 0x77075FE729E79790, 0x0DD9434624C8A4E7),
                t2d: GF254::w64le(0xBF8F11E2DFA9B062, 0x1B17D8255EE8B364,
                                 0x62C2150CF72C6344, 0x28106880D081E8DC) },
    PointDuif { ypx: GF254::w64le(0xF4A4AF0DDFEC91C1, 0x1A8F0E6C977E1F2E,
                                 0x72A7A3A738B9316F, 0x323716728C4E22EC),
                ymx: GF254::w64le(0xC14069065BA4AF3B, 0x081514248911D367,
                                 0x51BD4AFAA8B6C337, 0x50E77A9B513400E7),
                t2d: GF254::w64le(0x46C0051B2A822548, 0x024886E41A5EDCFC,
                                 0xA06B0EFA41CAC17F, 0x336A30B01B9C5675) },
    PointDuif { ypx: GF254::w64le(0x74FB2C10CA097626, 0x2B204CAA48E90981,
                                 0x6902C952B9A17B74, 0x39C2E9B6B922303B),
                ymx: GF254::w64le(0xB9216B9B3C597419, 0x6D92930264F15F76,
                                 0x7B1297D5EEAE1427, 0x0F0744ADFE1BD307),
                t2d: GF254::w64le(0x33B57E265BE6A89D, 0x282FA2E533356C10,
                                 0x3A03995C61DC772C, 0x4F5D8F5E893DCFF5) },
    PointDuif { ypx: GF254::w64le(0x4BFC927EFC48023F, 0x596F2241D6A685AE,
                                 0x3CB3E0AFEC29B8A2, 0x31018E0D10653842),
                ymx: GF254::w64le(0x2FD00FE944575626, 0x1241D8704982E011,
                                 0x970D56664E6781A7, 0x1B05F49D0F3DE2CE),
                t2d: GF254::w64le(0xA994FFDF63717E66, 0x416374A76BA88E98,
                                 0x8B082CED53F1579A, 0x56781DFAB5D2AA4B) },
    PointDuif { ypx: GF254::w64le(0x8151DEFD1865B318, 0x64669B840D6081F7,
                                 0xE436F4BB5F38E14E, 0x43D438410A974B40),
                ymx: GF254::w64le(0x5832CEB3D666BE02, 0x06347D9E1AE1828E,
                                 0x6979471B39E3EA86, 0x2CF2CF61CB4B5AE4),
                t2d: GF254::w64le(0xB7AB29EADA5A6EE4, 0x12E75CB29ACA5768,
                                 0xE65B1109D30D1FFC, 0x71F9BECD6B320E5A) },
    PointDuif { ypx: GF254::w64le(0xDC8289026647EED9, 0x31D62D050CA5458F,
                                 0xEA2BBF523A54C1E5, 0x602BF0B9E3EE5491),
                ymx: GF254::w64le(0x25AA73622380AD4B, 0x2B6B1E3271DF5F58,
                                 0xDBC5EFD86AA0470D, 0x05353C24B8C4354B),
                t2d: GF254::w64le(0xA3C7DB3CF5E06BCA, 0x288A1C8F2B4EA5F7,
                                 0xD6152F5E12CE7CA1, 0x59D4C1B436673C7D) },
    PointDuif { ypx: GF254::w64le(0x1E02554E521FCB95, 0x66D3980F240AD440,
                                 0xABF16F6B39A4D9D1, 0x7FEA351CA94C2F62),
                ymx: GF254::w64le(0x3D62B6F3389163BA, 0x0FC6B44F2E7895EA,
                                 0xD5C64403CDA7C669, 0x2E4099090E603193),
                t2d: GF254::w64le(0x9B5C0FAF15FA4C2F, 0x46295C9D8E12B639,
                                 0x5CE4ADD63A5B331B, 0x5FA7BD736C4C5879) },
    PointDuif { ypx: GF254::w64le(0x47B3471447D1AEF2, 0x28004C1C22325739,
                                 0xD588437D9A3C5299, 0x2AB19C1812CD27E8),
                ymx: GF254::w64le(0x3AE700F680037802, 0x1AD163800B422B36,
                                 0x45B7EF36FABC2139, 0x44BCDEFF21DCBD1D),
                t2d: GF254::w64le(0x41C6DA2171E11C7B, 0x2C35EE79F7C4CC14,
                                 0x4852942759C13849, 0x6492D26F10BE050A) },
    PointDuif { ypx: GF254::w64le(0xA6F54E988C50F0D9, 0x6A2DB2B6DD62181B,
                                 0xF7D9806B2A5E57A3, 0x57526BDB3BA53D20),
                ymx: GF254::w64le(0x17CE6CB1F500E650, 0x05D841B042F8F345,
                                 0xAA800A6C698DE970, 0x04F4B559ABE2CB8E),
                t2d: GF254::w64le(0xC050DFD7259CE49D, 0x213839BDF94DB935,
                                 0xB371258655306204, 0x7D323B8B19F9705A) },
    PointDuif { ypx: GF254::w64le(0x26D4502B16B6C618, 0x79717069AA89595B,
                                 0xF867C0E36DB41872, 0x13D601D86C76E1D0),
                ymx: GF254::w64le(0x2DFC8B0D331B7383, 0x185472F3E42E8075,
                                 0x05BD13E72B10EBA0, 0x519A387490F79B95),
                t2d: GF254::w64le(0x8D09C1B2D3AD2500, 0x045DA45D2CF0F733,
                                 0x640181956862426C, 0x728D57F59BFE1B09) },
    PointDuif { ypx: GF254::w64le(0xF9A99F878DA2C585, 0x4FC4831E61DC4E10,
                                 0x6DC602CC54394FE0, 0x0484566B67E9E8AE),
                ymx: GF254::w64le(0xC5FCF0474A93809B, 0x71C0C23A58F3E2BB,
                                 0xB400FABE36FE6C43, 0x614C2F3EAEE4C0A7),
                t2d: GF254::w64le(0x7610A980D0E1C6C1, 0x1CE8197C88885DCC,
                                 0xEADE1C9F3AC2CB2B, 0x471AD07BAF2F341E) },
    PointDuif { ypx: GF254::w64le(0xD67A837C6B01121B, 0x2A8E64281F59CB59,
                                 0x52E701E42F3262CA, 0x19E0A27DECE50580),
                ymx: GF254::w64le(0xB5691C17A7BDA6AC, 0x43484C311B9DF1F2,
                                 0xA68155549BAE49EA, 0x43A2C5DDA225FAE5),
                t2d: GF254::w64le(0xFA5E992AED700EEF, 0x58911F5623918856,
                                 0x648B81A1E48C4DA9, 0x66E6E30CBDD0C3BD) },
    PointDuif { ypx: GF254::w64le(0xF3BA209C169D266B, 0x20F7A86230447685,
                                 0xD1BB5AAA1A0C3D2E, 0x366C29843D1111F1),
                ymx: GF254::w64le(0x06C78B642DCC9013, 0x27484A64E109E3FB,
                                 0x8F8EACBCA4677464, 0x0B6CB31B1DC24CC1),
                t2d: GF254::w64le(0xDF69C84F898F0FA0, 0x2DD426744920F2A2,
                                 0xC0912A197D4C5C69, 0x489ADE7F6A98D8D6) },
    // comb 4
    PointDuif { ypx: GF254::w64le(0x458769F47F203E28, 0x124F4123FC05AC97,
                                 0x3BB936F4AD6D7D67, 0x330954FED4F00FF8),
                ymx: GF254::w64le(0xC2CE650046F90EAF, 0x7BF94762D4F9DEBD,
                                 0x2E93172A586DFB83, 0x3C7A6062B4113D96),
                t2d: GF254::w64le(0x5DDB0397147F0D93, 0x08E3596FC6839034,
                                 0x374E67FF67639BFA, 0x19021C2119888232) },
    PointDuif { ypx: GF254::w64le(0x002F5D04FDD55EFA, 0x05B4C6E079E1BAA3,
                                 0xE5678EA3AD74C84C, 0x1C42F7826A58A77D),
                ymx: GF254::w64le(0xE054668BD2CAFACD, 0x237668D3EDE4261C,
                                 0xEDF46A6374AEBB32, 0x31EC8C5931CF0EF4),
                t2d: GF254::w64le(0x955C2E95C35B5825, 0x27D8B0EA68259603,
                                 0xB7A8976E427D1EC0, 0x6B6CC5C07152BD13) },
    PointDuif { ypx: GF254::w64le(0x03D88F0CA0B244CD, 0x001CAE9A8CFED897,
                                 0xA844B3A1F693A7FD, 0x676C9ACB7ABDEC96),
                ymx: GF254::w64le(0x631B6BD5E0CDBD33, 0x29F289DC0CDDD9B8,
                                 0x0947D57536FB2EFF, 0x1EB2CE650E3EB059),
                t2d: GF254::w64le(0x2139B3A40E8BF405, 0x4165EDFB39F4AE8D,
                                 0xE061EDA67A70D6A6, 0x2E3CC0328C9084F6) },
    PointDuif { ypx: GF254::w64le(0x1EF8329ED056063F, 0x6D4D01CE49E8B3D5,
                                 0x0110C92F1656D34B, 0x6DAD1C4E170829E0),
                ymx: GF254::w64le(0x584C56C590B477BE, 0x597E5F0AD525E935,
                                 0x6008264D8EB7D36D, 0x3F586754999C829E),
                t2d: GF254::w64le(0x3D7EA89DF5546A1D, 0x41754F7D9A3F4364,
                                 0x3B0796822EF879A7, 0x1AB2779598262872) },
    PointDuif { ypx: GF254::w64le(0xDC37C9F0BBEF7923, 0x256EC818EC35A097,
                                 0x4A72DA5C09DD5846, 0x51DF6C61EDCAD45C),
                ymx: GF254::w64le(0xAEF24FCDCF5CE819, 0x0BA6BB959AE689F1,
                                 0xE667BD65A57B3A9E, 0x71FFD591A28A8E4A),
                t2d: GF254::w64le(0x06C325FA53A7FADF, 0x6667F2986B2DCF13,
                                 0x3EF751A6D52A09E4, 0x517A104240B8C74A) },
    PointDuif { ypx: GF254::w64le(0xD08CDDFD8C8183F5, 0x59237CC71B8147F1,
                                 0xFFF94FD188395933, 0x538ACC592D10EF67),
                ymx: GF254::w64le(0xAC51CE386FF0EB1D, 0x69D42B8114C5FE65,
                                 0xA17EDA3995BFE8B9, 0x5DC6D98FDF05A341),
                t2d: GF254::w64le(0xF2304D375CE8BE78, 0x31B58521ECC483CA,
                                 0x04D2D8140780222A, 0x3DC18B2BE3ED95C9) },
    PointDuif { ypx: GF254::w64le(0xA48E1639F2D70D2B, 0x4FFD54A6BC0F38D0,
                                 0x8AE3C65BA6B7143B, 0x482EB41F9178FA9D),
                ymx: GF254::w64le(0x240B8B4E87AD4F1D, 0x6D8532420059EB40,
                                 0xC135F77E44275132, 0x6261076A0DAAE349),
                t2d: GF254::w64le(0x35316BDB3842765C, 0x246165BA3A8BFD92,
                                 0x1C2D774BD5177A75, 0x045A2F991647E3B6) },
    PointDuif { ypx: GF254::w64le(0xED3B5923594671A8, 0x0514FADA5ACD4DB5,
                                 0xE8297FC358A0F50F, 0x7CD2BADCF2952A91),
                ymx: GF254::w64le(0x0DA45130EA9AC266, 0x26A0D43C1E14C979,
                                 0xBB62B729FE93A390, 0x360357AFF7F67CCB),
                t2d: GF254::w64le(0x3AD4835D1C7C59E8, 0x570DAFFD86FA470B,
                                 0xD7C4BE698FA3BD96, 0x17E4BDEC2AD76FFC) },
    PointDuif { ypx: GF254::w64le(0x43CE4EA9EAD7DC51, 0x58BA7AE0D64A518E,
                                 0xE014CC7E64680555, 0x03ABC953CE2630B8),
                ymx: GF254::w64le(0xA318620C7799BE57, 0x2B258FA2E84DA952,
                                 0xDD88FDC5063B2FFD, 0x17371DD79A3AA556),
                t2d: GF254::w64le(0x927B837578981299, 0x554552101D90AB2D,
                                 0xB45306218CE54BD0, 0x59109B65FFDB6235) },
    PointDuif { ypx: GF254::w64le(0x8663E0C4A180A515, 0x41467FE41C6604F4,
                                 0xAE2C1AA4DCB73878, 0x19D3CB02C6C07517),
                ymx: GF254::w64le(0xAA147C97EA6745F1, 0x70DAC71A31CAC43C,
                                 0xB9213EC26AF87DFA, 0x67F228E9F60E7B25),
                t2d: GF254::w64le(0xBFB59B8CF78DF3DF, 0x36687792A4256FA3,
                                 0xE1BE5C1F23177544, 0x786A9E1B644B1C90) },
    PointDuif { ypx: GF254::w64le(0x4172F47393CA7F5B, 0x62AE5BB4B8AAEB59,
                                 0xBCD9C431FA631B6F, 0x1FBE20B2EDC9CC6D),
                ymx: GF254::w64le(0x5FDD829FBC0EE085, 0x241DD315ADC5DD59,
                                 0xB4B688D625F7DBB6, 0x595A82FEE5BED2D4),
                t2d: GF254::w64le(0x69653AE0CC11880D, 0x2B9E85FEFC402F76,
                                 0xBB2495B507770A81, 0x05D20C575FB34731) },
    PointDuif { ypx: GF254::w64le(0x9D9E623436485AB2, 0x27012A9665F3FEBB,
                                 0x586CFEF484C04FF7, 0x44A5860CC0EABFBE),
                ymx: GF254::w64le(0x6FBFE6E2F3532E80, 0x05ABEABAAF3220FE,
                                 0x1BED21F2CB809678, 0x2AA62112B7EAFED2),
                t2d: GF254::w64le(0xE298837CF610190B, 0x1EC8FBBCEF9158F8,
                                 0x1EFE9B3AA4F96F6B, 0x6A3B842A068B0EF3) },
    PointDuif { ypx: GF254::w64le(0x92DD4B7CD7F827F7, 0x605175BBF3FD1C97,
                                 0x139BB6419C1F6D98, 0x3A3AB2E9978DB310),
                ymx: GF254::w64le(0xC5C95941C9D5DD0B, 0x34C6C76025B2BCE0,
                                 0x0D44115A49BB8126, 0x7622CBEB11DAF619),
                t2d: GF254::w64le(0x785BFF93164EF5AD, 0x7191647D355CB45D,
                                 0x117F255C4CCE6E5C, 0x581B448B0E9AAE3E) },
    PointDuif { ypx: GF254::w64le(0x54A4F3CB36225414, 0x790180C539BC4685,
                                 0x47064043B7C6B96F, 0x43CCCF5B3A2C010B),
                ymx: GF254::w64le(0x1DFBF3AFC14C3731, 0x1C368F3195572574,
                                 0x00BC2ED3B5070B5A, 0x0332D8DD63B37F60),
                t2d: GF254::w64le(0x0744B1908C9BD8F0, 0x2D258E628DACB9CE,
                                 0xBBA5B4BDB9C61E14, 0x0BCA12295A34E996) },
    PointDuif { ypx: GF254::w64le(0x059C84C66F2175D4, 0x1A3BED438790BE78,
                                 0xDF394F577DABB5B0, 0x304777E63B3C33E4),
                ymx: GF254::w64le(0x59A29D4FE82C5A6A, 0x72E421D1E88E77A4,
                                 0x69E6230313312959, 0x2DA03AAD8CF2BBB8),
                t2d: GF254::w64le(0x2858D8608FECB0B6, 0x343099E7A40243A6,
                                 0xBA29B675D29A8F63, 0x3D2028A4F6F15886) },
    PointDuif { ypx: GF254::w64le(0xF068E2D286047D0A, 0x14999B5D6C770E20,
                                 0xD1874A592385DA79, 0x78AEB552C15A1CD9),
                ymx: GF254::w64le(0x482DCCCC23E9C06E, 0x7B18A19FB54B5745,
                                 0x036C896EFE9A7A06, 0x2F2C2CE0D1871C13),
                t2d: GF254::w64le(0x3B2D9B9ED65492C7, 0x0649C7E50819D077,
                                 0xCDAB66EA7B65E3CB, 0x49B15B40C4AAF03F) },
];

// Odd multiples 1*B, 3*B, ..., 127*B for B = G, phi(G), psi(G) and
// psi(phi(G)), in that order (64 points per base). Used by the wNAF
// double-base multiplication (window width 8).
pub(crate) static DOUBLE_SCALAR_TABLE: [PointDuif; 4 * NPOINTS_DOUBLEMUL_WP] = [
    // G * 1
    PointDuif { ypx: GF254::w64le(0xE18A34F3A703E631, 0x287460BF1D502B5F,
                                 0xE02E62F7E4F90353, 0x0C3BA0378B86ACDE),
                ymx: GF254::w64le(0x90BF0F98B0937EDC, 0x740B7C7824F0C555,
                                 0xB321239123A01366, 0x4FFCF5B93A9557A5),
                t2d: GF254::w64le(0x297AFCCBABDA42BB, 0x5948D137556C97C6,
                                 0xA8189A393330684C, 0x0CAF2B720A341F27) },
    // G * 3
    PointDuif { ypx: GF254::w64le(0x892756B15BCF68C4, 0x5742F77C98A526BA,
                                 0x340A5A1DE9F89F9B, 0x14EF680AEE75D0F7),
                ymx: GF254::w64le(0x84E770E14043A41F, 0x0212C41116C33C95,
                                 0x35B791E6DE4DC0E2, 0x5949DF08518D5D28),
                t2d: GF254::w64le(0x6A0E120744ED10DB, 0x5A5183CE844391D3,
                                 0x6F618B158AFDBA50, 0x2CE2037E470E2088) },
    // G * 5
    PointDuif { ypx: GF254::w64le(0x1F49FA149A64BA3C, 0x5F9876D519670451,
                                 0x030105056F55586B, 0x020F1A557D8FD726),
                ymx: GF254::w64le(0xDF4CB175B06D86C8, 0x694FBCBE7FE58390,
                                 0x7933294A756A1B67, 0x09DBE9924B58F8EC),
                t2d: GF254::w64le(0x590F4403CDF197B6, 0x1C07969FC87A0BA7,
                                 0xC496477712252367, 0x5508976022F1B096) },
    // G * 7
    PointDuif { ypx: GF254::w64le(0xEFDA361E452E1775, 0x7A0A0CCCACC838FB,
                                 0xB07E791C0BE5DC5F, 0x24D9B6B418CBCB93),
                ymx: GF254::w64le(0x497970F3C6117E03, 0x3986A158CB96D595,
                                 0x8F80586CE692612B, 0x305CAFDA7E4DF9D6),
                t2d: GF254::w64le(0xC1A1C2E06452914A, 0x7EF989C0EB583079,
                                 0x3A765B1F7364B099, 0x4FEE236D58299C6B) },
    // G * 9
    PointDuif { ypx: GF254::w64le(0x6F81095F770E8419, 0x53BBD86B7396BC09,
                                 0x2B72BA726B2B4210, 0x625DDA1D2901C78B),
                ymx: GF254::w64le(0x0FF5BC7B18CD2B3E, 0x0556598C7358D332,
                                 0x0991245F20FF50D7, 0x0E7F58E5E919A97E),
                t2d: GF254::w64le(0x5A0561373B758756, 0x6447BC93F87C198A,
                                 0xF9230604C34C7520, 0x6B214425475C1BFA) },
    // G * 11
    PointDuif { ypx: GF254::w64le(0xE93DE62D6A7F9497, 0x2129459D86F4493C,
                                 0x456394C7C464CFE4, 0x612434FEC3F4A1B3),
                ymx: GF254::w64le(0x1ED91EDDF44261F3, 0x0C6D3854F9E0A3FF,
                                 0xD3FD153188A7E4E3, 0x24691FBDCA16910C),
                t2d: GF254::w64le(0xBE97465CD7625C9D, 0x2AA61CD373F759F4,
                                 0x824D5763A326D62B, 0x1A0AE39E50DA20BA) },
    // G * 13
    PointDuif { ypx: GF254::w64le(0x32D0C8481EE4C3B9, 0x6C3687109CDD18C6,
                                 0xE52717142FBF95DA, 0x67BFA41FB52CE9C6),
                ymx: GF254::w64le(0x4E24D6A088A01474, 0x49A6CA0AE3FB6626,
                                 0xD67F8FAA9103191E, 0x674888F5AA6D3062),
                t2d: GF254::w64le(0x4BA73824C2E85A99, 0x406B2FD18D35B314,
                                 0xA7087B1BEA728AC1, 0x11D2F222317B160E) },
    // G * 15
    PointDuif { ypx: GF254::w64le(0xF8946E007E23A469, 0x22A196FABBCE31A2,
                                 0x5309EE1BDC1216BA, 0x240FE9953827A324),
                ymx: GF254::w64le(0xF9FCB89B63AEB5C7, 0x603B8149ED16B1B0,
                                 0xB1F1876C02CF61FB, 0x4A5E32AF612F948B),
                t2d: GF254::w64le(0xFC491AEDE69A8813, 0x1AD9379136E53AA5,
                                 0x5DA50DB1D5E6C123, 0x2F4014F7FE2C12CA) },
    // G * 17
    PointDuif { ypx: GF254::w64le(0xE4F6791D7685C3F5, 0x4C218521C3745A9B,
                                 0x0C0521AF98555F97, 0x1462A12953CADA7B),
                ymx: GF254::w64le(0x0BB2AB63D6452C1B, 0x5783C531EC98BB87,
                                 0x737DEF53605DBC9C, 0x49F982B930E86719),
                t2d: GF254::w64le(0x75B16790CB5211E3, 0x45AD6574CDBAE99E,
                                 0x1062B72DFEEC9851, 0x45029A09CC468C88) },
    // G * 19
    PointDuif { ypx: GF254::w64le(0x532240DE77F3A1F2, 0x17BD291EAA9AD0EA,
                                 0xE0A2D7EFC2F8A0A0, 0x3A7412052021778E),
                ymx: GF254::w64le(0xB0DFB0976ACC90DF, 0x7FD603B689A7B1F3,
                                 0x1152579CCB00D6C6, 0x6340743B631849A3),
                t2d: GF254::w64le(0xEBAA47290E0CDA01, 0x143265A6D53FEF0B,
                                 0x45325D6FD981E75A, 0x0E9780CC39586F2A) },
    // G * 21
    PointDuif { ypx: GF254::w64le(0xA4F68D207A8628DD, 0x50D230B51893E841,
                                 0xF3BD769A4BB504B6, 0x55975C063969292E),
                ymx: GF254::w64le(0x07727BA25FB8756F, 0x07FF86CF8ED731FD,
                                 0xEF57FA40CC35A1F0, 0x70753A70874218FC),
                t2d: GF254::w64le(0x615954E2342B973C, 0x5AA9D68F1A59DF86,
                                 0x3B8E9E9FF5E44468, 0x2E749114D60A3D23) },
    // G * 23
    PointDuif { ypx: GF254::w64le(0x14A1B91EC176DB4B, 0x55F91A63D69AAE6D,
                                 0xF42382327B1B6D27, 0x2ACF1F475FACAAFD),
                ymx: GF254::w64le(0xFD9069B479B58968, 0x3BAAF4E5C4A45F77,
                                 0xA2AC9AB98A7AAAB6, 0x5466CB5018F50981),
                t2d: GF254::w64le(0x3E6BA27771BA3205, 0x31EA90CDEA1BBBE4,
                                 0x0000416B5C557393, 0x464CB0415A510D7D) },
    // G * 25
    PointDuif { ypx: GF254::w64le(0xD02087D206FF2BBF, 0x2B9C8ECD7FABE736,
                                 0xB2B56D3842CAAB0D, 0x046EA0B7767700A7),
                ymx: GF254::w64le(0x113A7A889E317310, 0x5992A354BEF7D0CA,
                                 0x3EDDA94ED50388BD, 0x052661F767839154),
                t2d: GF254::w64le(0x4C28EDF6E19E28E0, 0x1D19C2F2D2F644E5,
                                 0x5D732148DB35AB3D, 0x680C4714B83580F5) },
    // G * 27
    PointDuif { ypx: GF254::w64le(0xA374F282BB80CCEC, 0x789E609BC77AE11C,
                                 0x10D2577D599B45F2, 0x1C548B5B857721B1),
                ymx: GF254::w64le(0x7BAEA726B4543FDF, 0x3C1562912D1B4ED2,
                                 0xD6362203B7E82082, 0x1414E523D3C7A900),
                t2d: GF254::w64le(0x7CA349951C1D23A9, 0x4DA4265E3CE80FB4,
                                 0x7981EBBCACA9EF36, 0x4EBAC9E5B5BF980B) },
    // G * 29
    PointDuif { ypx: GF254::w64le(0xABD2C1DCF49CB5A4, 0x3F54ACFC25C6340F,
                                 0x202EEFFABBD11CBD, 0x67216B7CB3695E8C),
                ymx: GF254::w64le(0xFF7CBCF9B23FC9F1, 0x2EEBEBDFF7FA7AFB,
                                 0x71156BEFA111F85E, 0x1B8FD98DF522902C),
                t2d: GF254::w64le(0x6B28EBAD62519791, 0x6CF0EA960E01D8ED,
                                 0xB4617BC2006967D5, 0x323DA065CB3DF0AD) },
    // G * 31
    PointDuif { ypx: GF254::w64le(0x31687D0741E24D9C, 0x02DB8F2B509A7CC2,
                                 0x9243F85924320527, 0x68C360F01D6E6D2B),
                ymx: GF254::w64le(0x2351C5E877D5306A, 0x6F56CCFC85C5F3A9,
                                 0x1B09652837C4928F, 0x0B3337554C83F971),
                t2d: GF254::w64le(0xE2931BE2CCC783EC, 0x46829694BA08C64F,
                                 0x9F35E36358E2C6AC, 0x1474B333B000D170) },
    // G * 33
    PointDuif { ypx: GF254::w64le(0x24D792756FC96640, 0x618FDA9FEF868C5E,
                                 0xB7FF5B125AFD9375, 0x778DD97E0440C258),
                ymx: GF254::w64le(0xFBFF314886219627, 0x3417E1E1E2A7E811,
                                 0x21E959A88F7B7BDC, 0x3508C2EB8C3C8672),
                t2d: GF254::w64le(0x827ECDDE111C430F, 0x21BCB19FB07AA134,
                                 0xE0C1FA50AB2F5746, 0x401E680B4E6658FA) },
    // G * 35
    PointDuif { ypx: GF254::w64le(0x2CC24BAB313693CC, 0x20541C12B964447A,
                                 0x374975B6FB81C3CC, 0x52905EFB344E17F7),
                ymx: GF254::w64le(0x79C5C9B56D8B5F9E, 0x3390BF75D2B9A3EC,
                                 0x7EF3807D895BF4E4, 0x2814165A42046B51),
                t2d: GF254::w64le(0x7F8CFD09326FE158, 0x3232FB4F4C9762EC,
                                 0x5678D6DACC194D25, 0x6F7CAFFB0A7545E8) },
    // G * 37
    PointDuif { ypx: GF254::w64le(0xBD981637B23E7963, 0x691D7B7CB88A0EF5,
                                 0x10BA319AE2062914, 0x06FB144F8295A85B),
                ymx: GF254::w64le(0x80E620976BF62F8F, 0x2A425971EC73D6B4,
                                 0x800AA9E741D10B1C, 0x230D7D8BD1A0469B),
                t2d: GF254::w64le(0x65AACE37428DFE8C, 0x0FCAB5297F58B667,
                                 0xCF0E9526943AF7B8, 0x7D90915B75D4DAE7) },
    // G * 39
    PointDuif { ypx: GF254::w64le(0x7455A46156259D6B, 0x29BCC06374CCE1B5,
                                 0xF2FB0ED3AA87AEFD, 0x211A06AF0E54DD58),
                ymx: GF254::w64le(0x6C0C95C5723DE9BC, 0x6299B6ED25008CA7,
                                 0x7FD63E784D4DFB18, 0x2CC93B4D9BC1DB30),
                t2d: GF254::w64le(0xEBC7E2D44C5D13EA, 0x3278E18D4D3D11A0,
                                 0x349E3DD25A215F79, 0x7EB2A7150B30416D) },
    // G * 41
    PointDuif { ypx: GF254::w64le(0x05F3D7D5F6A094CB, 0x2A3771D48E331405,
                                 0x08EF39E9DC96F009, 0x012248373A364992),
                ymx: GF254::w64le(0xF758F92FC9FD4D33, 0x2339D8C6DFD3CA6C,
                                 0x8B000965962673B4, 0x746FF43EB99D9054),
                t2d: GF254::w64le(0x47ECDC054A422EFF, 0x33D8F7C8267B7F0C,
                                 0x22FE00AC921A42AE, 0x31E57F3D31FCD8E6) },
    // G * 43
    PointDuif { ypx: GF254::w64le(0xBB912315A1C50869, 0x4AC8CDB0FA7EBBAF,
                                 0x0541D74A60973EDF, 0x7234900334B2C5D7),
                ymx: GF254::w64le(0xF2E545F730ADFA33, 0x224E44E63DB5AC96,
                                 0xFCBA3D005C6FDEB9, 0x2C93A4E6559936B5),
                t2d: GF254::w64le(0x7727A0D7AD88D758, 0x2E33100216719CDD,
                                 0x7B2EF89AEB2C0254, 0x1F6DE5B74758AFB4) },
    // G * 45
    PointDuif { ypx: GF254::w64le(0x6AE89047114FB321, 0x3D605E9A6EC6D80D,
                                 0x18E915C727A874D8, 0x699088B5E9D0912F),
                ymx: GF254::w64le(0xAF9344618E056F10, 0x1B9169DF8245E0B3,
                                 0x5EB8C33D70F4C891, 0x1609DDFB222B13C3),
                t2d: GF254::w64le(0x8131C885D1B366ED, 0x7BC3CF9D9CB1A7B0,
                                 0xD297478D2FC93968, 0x13CBB4573A4EA7F5) },
    // G * 47
    PointDuif { ypx: GF254::w64le(0xDD37B5CC64D5986B, 0x7ED3D1D7D81AB5DC,
                                 0xAC53485F23973C9E, 0x0705675D333B91D7),
                ymx: GF254::w64le(0xADE5D213C43186C1, 0x6A8BDF57B4BFDF14,
                                 0xA87F88A1DE717963, 0x17F29220B519BCE2),
                t2d: GF254::w64le(0x7AF2D7FB0F95C610, 0x28D1D3923B144A7C,
                                 0x8E73C3D8972813E1, 0x00100B40C62E72C1) },
    // G * 49
    PointDuif { ypx: GF254::w64le(0x84DE7A81FA1F50DA, 0x4FA391D6589D8244,
                                 0xBCC3596F0834B285, 0x4D4ACBD60A24E9CE),
                ymx: GF254::w64le(0x97FA98B8C1835A0D, 0x33ABCF8E29901D0B,
                                 0x60A73D1975B3D082, 0x60666AA4325B948D),
                t2d: GF254::w64le(0xAD54ADB769284A39, 0x227A98D113609B28,
                                 0x4A1E1FFCAE6A3872, 0x1E4EE44BD67F818C) },
    // G * 51
    PointDuif { ypx: GF254::w64le(0x5A74C6BB4387D315, 0x019428C0B1B18795,
                                 0x5CC153E270BBB055, 0x2B3CABDF00DC4A61),
                ymx: GF254::w64le(0x834110C026924B57, 0x2D30E985F2D9F217,
                                 0x47116979333389F5, 0x53E3FD6A18202417),
                t2d: GF254::w64le(0xB1393CD79C2E5864, 0x58D92935E4112E82,
                                 0x86989A7EC8305B6D, 0x42A8FE4EEE28F37A) },
    // G * 53
    PointDuif { ypx: GF254::w64le(0x74E212EF01591901, 0x3277917A0397B1B9,
                                 0x7BBCBE6E3D687544, 0x0B8957701D09AFB6),
                ymx: GF254::w64le(0x6CFBC8EE74503668, 0x48A9925ADA9F8348,
                                 0x57045753BA2D0F4E, 0x7D69CA3866223D66),
                t2d: GF254::w64le(0xC7054CE22917271F, 0x41BCE1E1133B51DE,
                                 0x3A3AE42DF81EC35E, 0x7EAADA0F42D47CC3) },
    // G * 55
    PointDuif { ypx: GF254::w64le(0x13B138F1048A57CC, 0x64F98ABD7E915A8F,
                                 0x7AF195EB16A0C732, 0x11BE81A791D634D2),
                ymx: GF254::w64le(0x97D8DF47430F61B8, 0x0767C7B381271004,
                                 0x3E949136FB940AA6, 0x3BDEE340CD956DBA),
                t2d: GF254::w64le(0xB250EC4FF91D2602, 0x4CDE2454D47F59DB,
                                 0xAF5E749530D978CB, 0x5A8E2F2119D4D835) },
    // G * 57
    PointDuif { ypx: GF254::w64le(0xDF1CB5425A0744DF, 0x3D3B08A7BF35D055,
                                 0xC6335E832DE4719C, 0x6EB8D97E09154D42),
                ymx: GF254::w64le(0x2F6A3F8DE3D20DD9, 0x13F23CFD276233DA,
                                 0xB4A6B80DFC0FA41C, 0x58D876403ACFD7D7),
                t2d: GF254::w64le(0x2AD422078B8E139B, 0x73DBEE2ABBAF494D,
                                 0x09A2758891ECA3C8, 0x6EF9A9F1178B0938) },
    // G * 59
    PointDuif { ypx: GF254::w64le(0xFC7E9ECB90C637DA, 0x3A04345FC10B1A7C,
                                 0xC024E9CB62F9FF1F, 0x6C4F9C3AA4AA33D8),
                ymx: GF254::w64le(0x049D6995B95AC1F0, 0x2243845195763A1B,
                                 0xA1466A31700AC276, 0x600FB7123A325905),
                t2d: GF254::w64le(0x9D391A64A0D35A24, 0x3B093B550641F108,
                                 0x2275DE5BFD2E221F, 0x25F5E7465963DB1E) },
    // G * 61
    PointDuif { ypx: GF254::w64le(0x3E220107F7E7FB84, 0x6F06A23BC1B85A8E,
                                 0xB4198D19F6EB0E48, 0x5DC11761DAD45FDA),
                ymx: GF254::w64le(0xBA303E492AB52A0D, 0x127C69C73DA9F528,
                                 0xD3A5B70CF6C790BE, 0x0D72B0C50819DA5C),
                t2d: GF254::w64le(0x193F90D62EC2CDF7, 0x67F7D0CFC4F46DAF,
                                 0x7AEC083D52F380EA, 0x7C0A1DDA4A28BF4D) },
    // G * 63
    PointDuif { ypx: GF254::w64le(0x46FD20FE6008CBA7, 0x7A588C914115D595,
                                 0x8FB1D3DAECF45F78, 0x0851DAC094E7B036),
                ymx: GF254::w64le(0xCAE0A76E2A32A892, 0x104F861322DDDB2F,
                                 0xB79D81E46E1F9006, 0x1E4D28D7A2498912),
                t2d: GF254::w64le(0xAF3175D3974B89BF, 0x613D00F9A69C55C2,
                                 0x23F6883E8E65226F, 0x072F7ED65C6DEF05) },
    // G * 65
    PointDuif { ypx: GF254::w64le(0x6690E643BB38E243, 0x1A81C4A7C9189B15,
                                 0x1056D1669E4749AE, 0x0137F2A7418F190C),
                ymx: GF254::w64le(0xED3192796E699D16, 0x3ED76DB45C38A37C,
                                 0x78E86D1475A88243, 0x45985AACC495B16E),
                t2d: GF254::w64le(0x47D5C8208E8F1030, 0x6DBE5F68B4D0E782,
                                 0x08D3D0182CF7F26B, 0x64C375CE172FADBD) },
    // G * 67
    PointDuif { ypx: GF254::w64le(0xBA0F6DB3A20C2875, 0x57E1D90A53241250,
                                 0x0315433FDDF8E63E, 0x33344750E37DAD9B),
                ymx: GF254::w64le(0x62CC0D28AE69B016, 0x435FE80F6100D547,
                                 0x5874AEA8669D3DF5, 0x3B96913F8264D4A9),
                t2d: GF254::w64le(0x738067D6BB1314B0, 0x48CCCF24CC6F4CCF,
                                 0x6F5E2BBD68B777AF, 0x34C2C37BA9635D66) },
    // G * 69
    PointDuif { ypx: GF254::w64le(0xD731534900FDBE5B, 0x4E4F9D97AFE11D43,
                                 0x81B41214351B73D7, 0x1D48D100AD11A5AE),
                ymx: GF254::w64le(0x2A4EE76628E2B151, 0x34902E901877EFB8,
                                 0xB5A8561A0FD45394, 0x44317AF6D5CD5AC0),
                t2d: GF254::w64le(0x354C2469E9068BAD, 0x0771FE2761CAD022,
                                 0xFDA76EE8212D0F2B, 0x76CDEEC6D4435495) },
    // G * 71
    PointDuif { ypx: GF254::w64le(0x55C98575B3E825FD, 0x2983325ED5D73A1B,
                                 0x563C4C4FB3F466E7, 0x731B0FA413338BB0),
                ymx: GF254::w64le(0xDEB519CA57A05240, 0x7A7E909B5C4F7351,
                                 0xEFB7C153DD2AB28E, 0x11CA1C865DEE30B3),
                t2d: GF254::w64le(0x013CA8348D9D7DE1, 0x575E0BDAEEE8CF9A,
                                 0x464C98A21083AF7F, 0x683DDCD85C212EE3) },
    // G * 73
    PointDuif { ypx: GF254::w64le(0x1171F0AB4CD02019, 0x22C7E01C7F4D64C8,
                                 0x972EC0EF3F2E2ED3, 0x623F83C2611A476C),
                ymx: GF254::w64le(0x99B3F16BE9AA25A1, 0x2D3EBC5468990E0B,
                                 0x5D5FBA8546A4D5F2, 0x4716E6919D2986E3),
                t2d: GF254::w64le(0x3AB2F2BC183F5D6C, 0x5F6257D3910CD4BE,
                                 0x341C6F2A78F94F2B, 0x6EE8390B8A5064F5) },
    // G * 75
    PointDuif { ypx: GF254::w64le(0x9D8640B9B83CA8E7, 0x033C5AD24466BE3D,
                                 0x6F6CD68DB30DFD59, 0x52AA6B1C0F90F3F6),
                ymx: GF254::w64le(0xFE7BCD4C97403646, 0x11AB3FC960B05FB0,
                                 0x24584B77575896DA, 0x427F8DEB932DA137),
                t2d: GF254::w64le(0x928A28CB505306F0, 0x04AE916FE863820E,
                                 0xAABAA98911B9CD3F, 0x59E588BA994D9145) },
    // G * 77
    PointDuif { ypx: GF254::w64le(0x9B8F1AFABEEE9E9F, 0x04FFC7EF3476FF8E,
                                 0xE9CF53CE9937B146, 0x73FE42A801524448),
                ymx: GF254::w64le(0x224BDA3CF3BBAAAD, 0x5FA85056D59884A4,
                                 0x8E6EEAD48345726B, 0x09230936D41736D2),
                t2d: GF254::w64le(0xE679EB58D1AD6BE7, 0x08BB759B530B1EAF,
                                 0x9688EB527860E24B, 0x13704D2DAF9AF278) },
    // G * 79
    PointDuif { ypx: GF254::w64le(0xD9273AC71B906F14, 0x57EE05FBBD40DEB5,
                                 0xB7788E19BA9E61EB, 0x7967B6DC1C5D9699),
                ymx: GF254::w64le(0x36E043FC230127C0, 0x2A716598BB2D519C,
                                 0xC017B2840D4D1B07, 0x1D3BFA489F756A3F),
                t2d: GF254::w64le(0x4AD73ABF24318D36, 0x1915E6F53E12625D,
                                 0xB219A7C941F89084, 0x2280087A8F4762FC) },
    // G * 81
    PointDuif { ypx: GF254::w64le(0x8EB280345FD1B4E7, 0x55B8D4EE5772FD79,
                                 0xC9E63A787E2CE2E1, 0x685741ADBDA93885),
                ymx: GF254::w64le(0xFFB830AB11A3B491, 0x7E891121F9356428,
                                 0xC03AEA271A629078, 0x71C45932930A2639),
                t2d: GF254::w64le(0xE7DF192A6BF81795, 0x704AEE8F183AADF1,
                                 0x06DDB55A8A7A63D7, 0x52556D8763F3033C) },
    // G * 83
    PointDuif { ypx: GF254::w64le(0xB76B458C6F0C33A7, 0x28666B87C362B95A,
                                 0x365AE575A4C27B9B, 0x36EF35110562ADFD),
                ymx: GF254::w64le(0x89955DD8D927F9C7, 0x526E787D6A586C9E,
                                 0x762E0BC4EFF988C1, 0x6C9523B4B5AE4946),
                t2d: GF254::w64le(0xE90A909688CFE95F, 0x658A7DC8B3FFADA3,
                                 0xBEE148BA7A58520F, 0x6819007D8573D1CF) },
    // G * 85
    PointDuif { ypx: GF254::w64le(0x75D3B5EC141BE9C5, 0x4BC236AE634F3C27,
                                 0x1192FA9B8B30E894, 0x4129D43E1D092CBF),
                ymx: GF254::w64le(0xFCAC068558BBEA45, 0x513E8D87B8116534,
                                 0x5377A179A155ECD4, 0x6C93531E5545572F),
                t2d: GF254::w64le(0x727DF81BA09AAD91, 0x07527139DBC96250,
                                 0x150320B1D8BA172A, 0x2281E85F60A1809B) },
    // G * 87
    PointDuif { ypx: GF254::w64le(0x7164B7D524EBA6AF, 0x50D387163FEA4CA8,
                                 0xE90DE17D62AEBE78, 0x6AB369BA28C0410D),
                ymx: GF254::w64le(0x17D07E315A95D138, 0x58B496352453FEFD,
                                 0xB87A04DBBC101B92, 0x40A8F0FB757E9B0E),
                t2d: GF254::w64le(0x2148B48A696E64D1, 0x4E004A3A350C17D7,
                                 0x17927E9F386B563E, 0x29DA9CD441E3E3C5) },
    // G * 89
    PointDuif { ypx: GF254::w64le(0x883D2DC357417213, 0x2E94653FF7862644,
                                 0x53A37AF548453DF1, 0x04475DB3C300B93B),
                ymx: GF254::w64le(0x2D65FA4D815E7204, 0x231A2DB74C2C3CCD,
                                 0x1FD734C0CF4D97CD, 0x32D255C105F6D122),
                t2d: GF254::w64le(0xBB74FD9201EB07B0, 0x12E33F1C81AC6F60,
                                 0xFB9A6439BEA97072, 0x52E14B7DB9CDCBC1) },
    // G * 91
    PointDuif { ypx: GF254::w64le(0x637AC1A91AE374CB, 0x1C8622C35ADC8224,
                                 0xEB786C50A64B7D33, 0x362823A7232A5893),
                ymx: GF254::w64le(0xF22DAFCA688D472A, 0x18598F0E0237F7C4,
                                 0x97B8497BFFF4BCF1, 0x7ABF4CB27A9C5B7F),
                t2d: GF254::w64le(0xEA47C44E3B3D95D3, 0x58728FE3E1827A43,
                                 0x7FD3681A6DF902C8, 0x6DB1DBBDC413DE79) },
    // G * 93
    PointDuif { ypx: GF254::w64le(0xBC4EFFED1AC3007F, 0x7F31A54744887CAB,
                                 0xE6559B4F8BD2519A, 0x18A78EC5B0C241DB),
                ymx: GF254::w64le(0xF6E10285B15D2030, 0x5C1323EA219A8FF4,
                                 0x134B6F20DD116B47, 0x5D0ABDDBC8998733),
                t2d: GF254::w64le(0xA3C993938702E151, 0x0AB6AEB494F6AD5D,
                                 0x8CF3B4BEDA1815E6, 0x546CE323008C2FDC) },
    // G * 95
    PointDuif { ypx: GF254::w64le(0xA10EB5A6A78DBE39, 0x26D2E8A8B8457DA4,
                                 0x026CCBE31517D806, 0x2A35174B812F562C),
                ymx: GF254::w64le(0x57D70499DD7A374D, 0x3368F951ACD3C5E5,
                                 0x490B2515F901062C, 0x316109E7C315C377),
                t2d: GF254::w64le(0x32E20EBA569535CF, 0x496A8C39D667D709,
                                 0x5578096DC44D5E0F, 0x608A162CE73903B0) },
    // G * 97
    PointDuif { ypx: GF254::w64le(0x6B2E65852CB37CAB, 0x75B09A2E6ED609A9,
                                 0x7AC84B3082602455, 0x7690CBB594E84B94),
                ymx: GF254::w64le(0xFC85DAD9511973FB, 0x738A74B08C9006D0,
                                 0x83233FC939D5883E, 0x7FBFC08B5DB3C9F4),
                t2d: GF254::w64le(0x81A0E493FB5F7749, 0x2C255EF7E69A77C1,
                                 0x234F02E609CC656F, 0x5960CF0B961F3CEC) },
    // G * 99
    PointDuif { ypx: GF254::w64le(0xAC72940237B1F17A, 0x434E038A29D446AC,
                                 0xCA6A090E00D8B0C6, 0x1F1AAD24001E473E),
                ymx: GF254::w64le(0x6D64B6DC133399FE, 0x0899BA41E9DD4607,
                                 0xCA590B3F25BBF5DF, 0x57217978B0D8CE11),
                t2d: GF254::w64le(0xD6B4CB13DA6DE9AC, 0x3C88520CF564F75D,
                                 0x649FBD5075A7757F, 0x3F2593B90FE72161) },
    // G * 101
    PointDuif { ypx: GF254::w64le(0xE1BEE53E91DCC9A8, 0x010069DCE4C74A92,
                                 0xEF83968978AA855C, 0x6CD8848183B53D73),
                ymx: GF254::w64le(0x0B3DF59610E403EB, 0x713225D446180A7F,
                                 0xCC23112CC59850E2, 0x105796B670A3730C),
                t2d: GF254::w64le(0xA147F4EC7A2FA4CF, 0x32DA1F072D75B253,
                                 0x4E7007455E85F560, 0x76A5376A771FDD60) },
    // G * 103
    PointDuif { ypx: GF254::w64le(0x47EB4FABDCC699F7, 0x4E45DB6334C6ED96,
                                 0x36066F2BAB72546F, 0x04F48065593ECDEC),
                ymx: GF254::w64le(0x3FEC02793FBB5601, 0x122F74626B64A526,
                                 0x21D0F66FF83B4DBD, 0x1370610EDE647F1C),
                t2d: GF254::w64le(0x57B82242B88172C9, 0x527DCBADFDC65ADE,
                                 0x5E9C9A04385C93F5, 0x64D1CF9E52548A6C) },
    // G * 105
    PointDuif { ypx: GF254::w64le(0xBA0073337865C994, 0x633EE14E50BCD615,
                                 0xF840228EC4251095, 0x49BB96812A98F08D),
                ymx: GF254::w64le(0x82F57D0422F96678, 0x06D7E43BFFE7E0E1,
                                 0x33910CCA752AE863, 0x04D46E7C66087E38),
                t2d: GF254::w64le(0xF14935C4167017C3, 0x3F22E2F44D03C9AC,
                                 0xA6196244F2CD6164, 0x15A2B4CE514FA4DB) },
    // G * 107
    PointDuif { ypx: GF254::w64le(0x5191A04C4ABBD0C4, 0x0E763360ECC8A19D,
                                 0xFEF583C184A673C0, 0x75C2F30A7C7433E7),
                ymx: GF254::w64le(0xE947A55547C7C099, 0x245C7AE44F6E7A83,
                                 0x67A666F9E6BEC2D4, 0x5DE0B922FA645AC8),
                t2d: GF254::w64le(0xDD9B3E4A5CB72E22, 0x0139C2C857ADBA8E,
                                 0xA7FEB68E863AC231, 0x501381EF88EC2DA0) },
    // G * 109
    PointDuif { ypx: GF254::w64le(0xB2B8C6A470F40B01, 0x051D65BDB8363062,
                                 0x4CE90414A6D65714, 0x1E510B525D19DF0C),
                ymx: GF254::w64le(0x569E723F5D374CF6, 0x4BFE02FD38FDE1F0,
                                 0xAE7459EBC50F9AA2, 0x0F7E2CB170DFDE32),
                t2d: GF254::w64le(0x3C3DA2326A7407CB, 0x0CFC50A85FFD1842,
                                 0x62AB34C85E85C3C8, 0x22B4D9644BB37333) },
    // G * 111
    PointDuif { ypx: GF254::w64le(0x57D313B3D87C2D98, 0x4F432C1CBA49133F,
                                 0x6163D11FA4BEFC0C, 0x1AB94E122FDDF12E),
                ymx: GF254::w64le(0xFB7C9358AEFC85A8, 0x5B20068F81D949B1,
                                 0xCF8ED6FF2145C810, 0x5794AFC021932D00),
                t2d: GF254::w64le(0x5C8987AD9B6E35D5, 0x6BB1F4B836FDA03E,
                                 0x794F1FED4A3EA1D7, 0x0CF6D128DEB0E7BF) },
    // G * 113
    PointDuif { ypx: GF254::w64le(0x54EC3E1C65878CF5, 0x002811763BA2200E,
                                 0x382D917051E77B71, 0x49E00CBD013A9E7F),
                ymx: GF254::w64le(0xCCF576E9A4CF019C, 0x4B4A66287970333A,
                                 0xF772168915EDFC1F, 0x278EB5ECA6479685),
                t2d: GF254::w64le(0x8A95C8B9CF41CF06, 0x6E58C9C7826D39DB,
                                 0x478E119889F2FE75, 0x73ECD21991BD98D4) },
    // G * 115
    PointDuif { ypx: GF254::w64le(0x26E751FE9FBB9502, 0x29825B71B0632E95,
                                 0x21668F96EF8BB5C5, 0x2F2A899E53C9A004),
                ymx: GF254::w64le(0x2803292ED4345CE8, 0x72731055C7C65DEC,
                                 0x3AAACA9C4B6FE9A5, 0x6228D3CEDA8BD671),
                t2d: GF254::w64le(0x773E2C5EFFC48EAF, 0x017AB19E0FEA9AC9,
                                 0x9609E10496C8D766, 0x121E89F9B302C30F) },
    // G * 117
    PointDuif { ypx: GF254::w64le(0x4E87D00A0BE96480, 0x09BD8D170BA9DBAB,
                                 0xC6756F947ECD4E52, 0x2C9E40BBBCCD0F5B),
                ymx: GF254::w64le(0x42A5B77669FD812E, 0x66ABA9583B080D9E,
                                 0xEE55DF99D16E77C1, 0x4CC00C5C5EFF2509),
                t2d: GF254::w64le(0x8C84D5E20AB7C16B, 0x00AE5C96184FFEFB,
                                 0xB295E90346DCEF54, 0x5D1BDA0A39DC3B72) },
    // G * 119
    PointDuif { ypx: GF254::w64le(0x75F92D72A89B5EF2, 0x259D998C9FF9AC0E,
                                 0x8A1CFB72A6C433C1, 0x23F5B71D49D67604),
                ymx: GF254::w64le(0x478D8F30914F62EF, 0x08FE61135218ECA9,
                                 0x4DA2CE9BC6488C4A, 0x15F1EAFD35283E2E),
                t2d: GF254::w64le(0xC2D2BE3EBC42EA0F, 0x2A5216539D6EE902,
                                 0xA1E99052E7BDEEB2, 0x3A8F2631EC78290C) },
    // G * 121
    PointDuif { ypx: GF254::w64le(0xB71518A82EBFBFE4, 0x24700671C46EBDDC,
                                 0x6EF52D591A221F75, 0x4794614DB6A67D92),
                ymx: GF254::w64le(0x761F5C8EE4BAB607, 0x31D9DD8F2361B5D5,
                                 0x1A45593BE8DB3B29, 0x7F06C365EB116260),
                t2d: GF254::w64le(0x9D305A66E52EB65B, 0x5EDCFCB5613EAC18,
                                 0xEF34FD28154ADB75, 0x790F805753B9D742) },
    // G * 123
    PointDuif { ypx: GF254::w64le(0x6ECD5AC255DFB797, 0x0CBE14DB5D9A88DB,
                                 0xC1C86C5EFA815528, 0x2C636133BA59D887),
                ymx: GF254::w64le(0xC75D42C2D9F52297, 0x4BD3540C21E2EBD3,
                                 0x32E7CDF790DE6903, 0x1AAE3C9837D3E30A),
                t2d: GF254::w64le(0xEED028E49D436F09, 0x779AE12351EFED1C,
                                 0x6E0145587D9797A5, 0x25156E4CEE9A407B) },
    // G * 125
    PointDuif { ypx: GF254::w64le(0xAC2FD82F2AC57119, 0x7F8C026F1D182ED2,
                                 0xEACC0D8FB3241611, 0x5968DB65D2D7545A),
                ymx: GF254::w64le(0x7D525846B1121DBE, 0x57949FD7B80339CF,
                                 0x471FE9BEC9B66C01, 0x5C270057F1268EFA),
                t2d: GF254::w64le(0xCE092463083F656E, 0x16E8241CDC862CF9,
                                 0xB7CB2BBCAA06B312, 0x3C25936BD8863416) },
    // G * 127
    PointDuif { ypx: GF254::w64le(0x19B8CA966C4A3827, 0x1AE43BADFD21E63E,
                                 0x1DFD002B95A6AC6A, 0x4708E27F6D98E997),
                ymx: GF254::w64le(0xB5FD6322DC31AC7D, 0x53BAF4D9A16DD550,
                                 0x025AA2EA5463960C, 0x5B5B33C7A3CFA54F),
                t2d: GF254::w64le(0xDBA287866EE96B90, 0x4748C1F3F3A6DC4F,
                                 0x2333EC05A80C154B, 0x4A47745D5B99FB96) },
    // phi(G) * 1
    PointDuif { ypx: GF254::w64le(0x44955B062A6ECDED, 0x7791FEEA9015F170,
                                 0x736BF603D12FC35A, 0x2632ADBCA5388026),
                ymx: GF254::w64le(0x956E4C48E1697C4F, 0x4EE9ADFE8600E32D,
                                 0xA584042A0DA56406, 0x34A3D7F4BF457353),
                t2d: GF254::w64le(0x8D4FD4FE00176FAB, 0x15321EE855941F4E,
                                 0x670701EF81F340A4, 0x0C7D7C618AED0BA8) },
    // phi(G) * 3
    PointDuif { ypx: GF254::w64le(0x73283131D9BFD9D6, 0x34935A39E31BAC65,
                                 0x466CFBBCAAE8B991, 0x250DD54E18478AC6),
                ymx: GF254::w64le(0x659E46C51E40DE4F, 0x618EA014FEC50E04,
                                 0xFE64D883080B877C, 0x572CABBB6688C4F7),
                t2d: GF254::w64le(0xA2C817493A834146, 0x06CD734876378120,
                                 0xE3DE0B717336A849, 0x36942F5191DB53C4) },
    // phi(G) * 5
    PointDuif { ypx: GF254::w64le(0xA3F9ADF66ABF4D88, 0x2A9A144B8087FA96,
                                 0xFE49FEFCB78A5B4F, 0x1BE40A8616928BAB),
                ymx: GF254::w64le(0x07A901975521F7AA, 0x1FC66EA683693510,
                                 0x4DBF0084BA42380E, 0x1F374495B918C737),
                t2d: GF254::w64le(0xB8346956A380A00A, 0x1346F4766FCDAA07,
                                 0xB4DB5689D46312C1, 0x775E7F3274DC1316) },
    // phi(G) * 7
    PointDuif { ypx: GF254::w64le(0x07898828F32341C0, 0x144390A33B3E86DF,
                                 0x70BC604CE1E9C5E4, 0x127652DE00220873),
                ymx: GF254::w64le(0x2874BC669DF50D45, 0x236F4585150161F4,
                                 0x3BFA4FFD318214E2, 0x7CC92A6165059745),
                t2d: GF254::w64le(0x2FAE0E92090EF72A, 0x26676BD59C4FCC3B,
                                 0x220C030974D1D447, 0x66455887E98686E7) },
    // phi(G) * 9
    PointDuif { ypx: GF254::w64le(0x4164B8E4D8760DDC, 0x5517A86F840FEB63,
                                 0xD9B42C6C9371CADE, 0x3A7F03CEECC160B9),
                ymx: GF254::w64le(0xDD4086D64CAE366C, 0x1B6290C327842533,
                                 0x144EFCD2A7A0E82B, 0x16621925CA10D31E),
                t2d: GF254::w64le(0xA9DCD13118E208F1, 0x5A90F97EDCB1C54E,
                                 0x80C47331C8749D99, 0x6F061A3569A80B55) },
    // phi(G) * 11
    PointDuif { ypx: GF254::w64le(0x0F6ABF619E2A15C5, 0x29106C98122245F4,
                                 0x5860B10985C9B47F, 0x4F379A379E15F410),
                ymx: GF254::w64le(0x2DD6F45DF68E1678, 0x2C475167AD9B283C,
                                 0x23B7AA00952A6A3A, 0x5532BC26A40C5365),
                t2d: GF254::w64le(0xA5C0A8BE3596CE22, 0x4FA3127A9AEFA56F,
                                 0x944E843AA973E67F, 0x3C7727D45AE87854) },
    // phi(G) * 13
    PointDuif { ypx: GF254::w64le(0x48FA2CE675117EA4, 0x7BCA8E04AD3BBB9C,
                                 0xD57439E4726F88E5, 0x3337D3A6A03B2286),
                ymx: GF254::w64le(0xB0B6172902005953, 0x514BD76734E6C0A1,
                                 0xF97F8934EED7C6B4, 0x0ABE13CEE7F1B75E),
                t2d: GF254::w64le(0x6C88107A120E54A7, 0x634F966D7A6E11DF,
                                 0x5044C53109B94097, 0x68D49FC65522B73A) },
    // phi(G) * 15
    PointDuif { ypx: GF254::w64le(0x69E295CD8C444666, 0x542C4C5FD999A224,
                                 0x13FF89418B5DA76F, 0x7133FA786A87ECB4),
                ymx: GF254::w64le(0x2F180926456402B4, 0x52DDADA7931C4DCC,
                                 0x6EAF0D2130C71590, 0x014EC2A2EC231826),
                t2d: GF254::w64le(0xAC05B61443B34DD6, 0x157ACBFAB118B219,
                                 0xE4E2F4B84AD01099, 0x0ABF4A4DA29A0EB8) },
    // phi(G) * 17
    PointDuif { ypx: GF254::w64le(0x5F852B85B59EAB1F, 0x1BD259C4726869ED,
                                 0xCE565D9287790A15, 0x17A48442BCF58A00),
                ymx: GF254::w64le(0x01E519522381363B, 0x2336D07A710DA07A,
                                 0xCFEBF2FBDC714CB2, 0x2F7A51474C23B8A9),
                t2d: GF254::w64le(0x77DB2A07D4E3716C, 0x40E8D8D2D0A09806,
                                 0x644363CE6D401AE4, 0x53F9CAE0470172FD) },
    // phi(G) * 19
    PointDuif { ypx: GF254::w64le(0x58D96ECD8DDADC53, 0x15028204F3D6D696,
                                 0x6F40A09214439CE2, 0x738C5371236C3E56),
                ymx: GF254::w64le(0x64F87EE7A28BF9FC, 0x4F1899449A810FEE,
                                 0xD0AA95F4BF21E376, 0x6170CC24283856BC),
                t2d: GF254::w64le(0x9DFC4927D764FF75, 0x227EA1563FA2E012,
                                 0xADDD3665622CE087, 0x473D3BEA07A5285E) },
    // phi(G) * 21
    PointDuif { ypx: GF254::w64le(0xC0B986EE0D2B0EB2, 0x78E584C740DD18ED,
                                 0xD5ADBF30A04FD508, 0x1C6AED5AB59BEDBB),
                ymx: GF254::w64le(0x25D05FCCBDDB5BA1, 0x4A58FB6B3F896319,
                                 0xDB2F6343FD8144FA, 0x46A445DE6D5B07E5),
                t2d: GF254::w64le(0xF67A06684FE9E1DA, 0x57B2515923B15C9F,
                                 0x50439940820A2A0C, 0x62F4B9B26F04DAB5) },
    // phi(G) * 23
    PointDuif { ypx: GF254::w64le(0xE79EA601D01B033D, 0x009BC6176F10FFFB,
                                 0x333BFF2F907ED39A, 0x253D0A9E626DD400),
                ymx: GF254::w64le(0x7A9BBEDCFCBEF06A, 0x2D1B6A7A5B39342D,
                                 0xBADFB462A124CC9A, 0x2E8CDE9D82C15CB0),
                t2d: GF254::w64le(0x7C3F81BCD6F1B2A1, 0x04CB0B8FA4075294,
                                 0xFA36D3DB38CBD304, 0x59FEF93442883553) },
    // phi(G) * 25
    PointDuif { ypx: GF254::w64le(0x91982A741CB9342E, 0x7B9D63AC17B01982,
                                 0x530B4EC25A293ECE, 0x611069AD9FA0F0A4),
                ymx: GF254::w64le(0x7A262A59B656A79D, 0x6FE6F8F4D6D015B0,
                                 0x2C2FD7641A5D4E50, 0x24B0C507058C911C),
                t2d: GF254::w64le(0x834882E492FE45AE, 0x68D0B01B13432761,
                                 0x0EACAAAF94178B8C, 0x123E3A93006D7D01) },
    // phi(G) * 27
    PointDuif { ypx: GF254::w64le(0xECF2FE69377FF33C, 0x4FC960AB4408584B,
                                 0x2ADC445B1EE45654, 0x4989681CD1D09A93),
                ymx: GF254::w64le(0x79509599AFE9E3B6, 0x7F6FFBBEEE861C15,
                                 0x2ED2859FD6391B25, 0x5E8BD52289B6AD27),
                t2d: GF254::w64le(0xC949280ADBCE7C79, 0x510999E865F0CD54,
                                 0x7F957314CE7D373B, 0x4B2C0EA4BAB08EF2) },
    // phi(G) * 29
    PointDuif { ypx: GF254::w64le(0x2D7CC08B5C05A8DB, 0x4609A0EA23507697,
                                 0xE204BA35182C55B8, 0x5E4D5903FDEF61E6),
                ymx: GF254::w64le(0xFE63842F2826598B, 0x782A3FD3AB62A179,
                                 0xD2F01A1979E5A0F3, 0x0FB4C6BDD637FBA2),
                t2d: GF254::w64le(0xFBFF4C192020C350, 0x14859008C3D223C0,
                                 0x65ED7A889C1A2E55, 0x1D78DAF483FA12CB) },
    // phi(G) * 31
    PointDuif { ypx: GF254::w64le(0x5B54D11B01BC09CA, 0x54FDE75737306515,
                                 0x89725231105B63A7, 0x712D1F394ADCDA99),
                ymx: GF254::w64le(0xB554006EE9ABEFAB, 0x04DD8F7BBD4C5381,
                                 0x98D22B3A31995549, 0x637A53DE6B57122F),
                t2d: GF254::w64le(0x8367D69B4C92DA63, 0x236F2A9514250DF6,
                                 0xB265509AF63D7B7C, 0x08522E36BC4B65F8) },
    // phi(G) * 33
    PointDuif { ypx: GF254::w64le(0xABAE725012CE8301, 0x493B257197A98CE9,
                                 0x33185838570E5F0A, 0x65F5477AC414EB6C),
                ymx: GF254::w64le(0xD002A36854699753, 0x2BE693B4D96EFDB3,
                                 0x3B32484119BDC53D, 0x55691AC09A8FAE1E),
                t2d: GF254::w64le(0x0249E394514C047F, 0x765674C90B78171F,
                                 0x1166F64638D6AB37, 0x746ADBA4CB52D18F) },
    // phi(G) * 35
    PointDuif { ypx: GF254::w64le(0x93E293653DDA6CDA, 0x5D004ED52EBF0B68,
                                 0x65C7C42D0AD96CC2, 0x3350DBE11CAFCA74),
                ymx: GF254::w64le(0xC638CFA8942FEF67, 0x0FF2DFFFC5AC1164,
                                 0x9E1B625E649AA471, 0x13A219D03D2EB86D),
                t2d: GF254::w64le(0xDB92859EBAF9F7F9, 0x645C50918F7D5ABC,
                                 0x25C10CFE99F7E5C6, 0x13D858B53F90170D) },
    // phi(G) * 37
    PointDuif { ypx: GF254::w64le(0xDDB258B13AB1E7A6, 0x4849FF49F4E13FC4,
                                 0x9EF87FA85511CDA8, 0x48C50D4D3B4D2F7A),
                ymx: GF254::w64le(0x6C98422C8007C9AC, 0x3FDD72E65A3D3491,
                                 0x56B18CB165B4EC3B, 0x6E2C6DF9E3FC3DAA),
                t2d: GF254::w64le(0xF6DB5AA98DDC97A4, 0x423FD4082F3FB795,
                                 0x42F8F5EDF424D0A0, 0x1A091C2696139936) },
    // phi(G) * 39
    PointDuif { ypx: GF254::w64le(0x3161C2BBB3B2D58A, 0x2E8D339EB0FB9099,
                                 0x45EF7D11F6FAB685, 0x7F222A068DB3DA4B),
                ymx: GF254::w64le(0x9AF96F9742549A7C, 0x55370DF31DCEC81C,
                                 0xDE98E81B131AF02E, 0x58BD0622A474ACEE),
                t2d: GF254::w64le(0x8AB40FA7CA882E0D, 0x5B4DB195655F2410,
                                 0x4754EB479ADA77FD, 0x67A8A437D6FC8A7D) },
    // phi(G) * 41
    PointDuif { ypx: GF254::w64le(0x9888254A4F0C9D58, 0x3232BA83BED0C618,
                                 0x587B0DE0207B57D9, 0x020DF6BECB096AA7),
                ymx: GF254::w64le(0xEF9E41052A29A8AB, 0x4AE671EE70A15A69,
                                 0x167CE954923EE086, 0x6878C3996C1DE887),
                t2d: GF254::w64le(0xB29C711490AC097E, 0x1CF41A9C2577D144,
                                 0x0590796BA46D8D29, 0x1C2E6DC8D4AEBB65) },
    // phi(G) * 43
    PointDuif { ypx: GF254::w64le(0xBFB904F8AC9B4CB9, 0x4EA1742C786469E7,
                                 0x5A422F48401BE57D, 0x0BE0AFDC77D6D32F),
                ymx: GF254::w64le(0x5E8765CBA2C738D3, 0x7DAD0475059A089D,
                                 0x9288AE0C40DF7DF6, 0x51C65F97715A16D5),
                t2d: GF254::w64le(0xA9615D4C786FF9D4, 0x507FFE03EC0189EF,
                                 0x1C1F46684604E41F, 0x282FE9D567DB0EFC) },
    // phi(G) * 45
    PointDuif { ypx: GF254::w64le(0xEBEE7F8381FB8178, 0x5BD4B6045C208D57,
                                 0xF35694743439ED71, 0x7CDDD5A373EBC5EC),
                ymx: GF254::w64le(0xA58DF33CC68E3B5F, 0x40E6714F5C5C8DF3,
                                 0xEA881D4BFD489131, 0x6B36400B491C28C1),
                t2d: GF254::w64le(0xD4475CF594B6303B, 0x5B630CDDC72E654A,
                                 0xA0B587AD34394CE3, 0x3EA3BA6014F86275) },
    // phi(G) * 47
    PointDuif { ypx: GF254::w64le(0xC3DEAC125D20EEEE, 0x2EF3568410A2B3BB,
                                 0xEE6BA3FAC5D7EC00, 0x5FABCB3337AAA23C),
                ymx: GF254::w64le(0x6B1212E7B817889A, 0x0B37D285A9BE51D1,
                                 0x617CA543D762BF51, 0x0896B4CA694B01D0),
                t2d: GF254::w64le(0xE3ADD9718277A1FB, 0x553DEE7DD4784865,
                                 0x904B8F7E936CF430, 0x5B6A78F20B244B90) },
    // phi(G) * 49
    PointDuif { ypx: GF254::w64le(0xA2B876C2914B9BFA, 0x704DE952E9D969F4,
                                 0xB04EA1B54B7E7654, 0x5D307BB3949CF660),
                ymx: GF254::w64le(0xCEE4C23EBD049D17, 0x7A88293BB1031063,
                                 0x00B8432B8286F656, 0x260A9C86A16216E5),
                t2d: GF254::w64le(0xD140E6E6629D8686, 0x296011FF5601A000,
                                 0x536F0F76CD9B2928, 0x267409C23A823DD4) },
    // phi(G) * 51
    PointDuif { ypx: GF254::w64le(0x0F041043797F8423, 0x3DA6102605962CA9,
                                 0x2E69DFEEA02098EA, 0x427E7EEEECD3A0C5),
                ymx: GF254::w64le(0x75EFA5E8A590793D, 0x1F5841DF6DFDFC91,
                                 0x1AA1E1B8B9F3C326, 0x07BD5B0983FCEE91),
                t2d: GF254::w64le(0xD169420BE9C48939, 0x7940334F0BB9023D,
                                 0x9BB330FFF113764F, 0x674FF1B0CFE246C7) },
    // phi(G) * 53
    PointDuif { ypx: GF254::w64le(0xE2083F8D7129CBAB, 0x7E6223E3D9C04904,
                                 0x9BE411A7D5E883A3, 0x72642664E7C25590),
                ymx: GF254::w64le(0xBB1F783B5C412322, 0x46716E8FD737280B,
                                 0xFA363EEAEFFDE271, 0x6C256C131FC2C3B9),
                t2d: GF254::w64le(0x13259ABFCB2CE1D8, 0x53B96556E96AA708,
                                 0xFAA7C8D25119DA19, 0x05019F438E9F8995) },
    // phi(G) * 55
    PointDuif { ypx: GF254::w64le(0x05E1D55A9424F1EE, 0x63E8E14E6C2F3F09,
                                 0xE9D844E997A10158, 0x51904ED1E94A0CA5),
                ymx: GF254::w64le(0xB09462D4DF6BC6CC, 0x2EE5308E62172691,
                                 0x3F8438484547187A, 0x62B92B8D9739DDD4),
                t2d: GF254::w64le(0x3CA54AB5D39F083C, 0x25B3336048A288D4,
                                 0x7CAB0FD67E296979, 0x58BA2E783962CBB7) },
    // phi(G) * 57
    PointDuif { ypx: GF254::w64le(0x77808F1A1B8F3515, 0x290C219EE7153BDD,
                                 0x7584441F79128F01, 0x0442DB406F5135E3),
                ymx: GF254::w64le(0xE741DE52EC030A9D, 0x37469756586776B2,
                                 0xBD64C2A7173ADDE0, 0x2280B66D20888D0C),
                t2d: GF254::w64le(0xDD1B53CB4ADB0FB2, 0x3974964394C445BE,
                                 0x53B6A95E7C7FDD97, 0x6EACDC6F50496D95) },
    // phi(G) * 59
    PointDuif { ypx: GF254::w64le(0x178D04C0578A5BB3, 0x0D171A5F5215C9C8,
                                 0xFE0D0171C504962E, 0x04EECE54B220495E),
                ymx: GF254::w64le(0xAC4D145001DB67AA, 0x6577C466962160AF,
                                 0xCDDAE62D99686AD7, 0x7A053A048D230D89),
                t2d: GF254::w64le(0x1FF09AA0E605A880, 0x5D260426F355232F,
                                 0xFBDAF7B0B53AAB89, 0x5EEF31B9EB0DF78C) },
    // phi(G) * 61
    PointDuif { ypx: GF254::w64le(0xFB787E56B7276288, 0x4DCCCBA87D630D06,
                                 0x415E4A4BC0A44B01, 0x0F0A981F71D8AE33),
                ymx: GF254::w64le(0xE0EBB786F98A1502, 0x0EA4AA3CE70DC628,
                                 0x8D36240617EBE037, 0x2D20C0E1D2002B5B),
                t2d: GF254::w64le(0x336F8AA411A30282, 0x1D87C67D8178EC4C,
                                 0xE468DFF8AC26B63B, 0x266086BD7F11C9BC) },
    // phi(G) * 63
    PointDuif { ypx: GF254::w64le(0x05CFEEDC80D829F8, 0x146902A029DD3355,
                                 0x413DB9327C068394, 0x55FA413791F64C38),
                ymx: GF254::w64le(0xE06395C10021BF9D, 0x18D66268CF79CE45,
                                 0x9E7AE6858DCC21BF, 0x3AD51DBE97B558F7),
                t2d: GF254::w64le(0x06792C747AEEF43C, 0x27EC9B782170ABB7,
                                 0x6AAFCA394A23E935, 0x18F7CBD98DB64112) },
    // phi(G) * 65
    PointDuif { ypx: GF254::w64le(0x34146CE6B36EDBFA, 0x1DCFB4EAB7CCEA23,
                                 0x68498E1F45B35467, 0x1B20D71A3B71D412),
                ymx: GF254::w64le(0x7A875FC94E602E3E, 0x78C15FA449576C2B,
                                 0xB52326D01CCAFE8A, 0x3F53F57324D70666),
                t2d: GF254::w64le(0x3830836E39BCEBAA, 0x27A30C73DD02C884,
                                 0x5DFED73DEDF2306F, 0x75EE4A8B6CF54F74) },
    // phi(G) * 67
    PointDuif { ypx: GF254::w64le(0x97ECC9C5851A8E3E, 0x496B581690C3DF2D,
                                 0xF7BBA1FE2D169E7D, 0x4B06184810A77BD3),
                ymx: GF254::w64le(0x40E6D643B903C7BD, 0x3C90F63B5176906D,
                                 0x92F47E1AC51F1EC6, 0x70C2454C53CC0DCF),
                t2d: GF254::w64le(0xB5A75D246C653B4E, 0x7E5173A420A8B0DF,
                                 0xCAFB44C471D0F4A3, 0x69A3A4E92BBE5977) },
    // phi(G) * 69
    PointDuif { ypx: GF254::w64le(0x26E93183CDFEB424, 0x1E0489B56FA7E130,
                                 0x669BEFA672FE9979, 0x0F8AEA6A7EF65BF9),
                ymx: GF254::w64le(0xFF0B883EA96B51FF, 0x31A668763C3C8867,
                                 0x6887A0029701C9BE, 0x545644CD70C87D63),
                t2d: GF254::w64le(0x537B6FB7DB9410E0, 0x6CA227F10229B3B9,
                                 0xC7D1B4D71FF22468, 0x522058D3B20569F9) },
    // phi(G) * 71
    PointDuif { ypx: GF254::w64le(0x5F4BFD813A51FB62, 0x105B94A3A42424A1,
                                 0x96DFDB685825857B, 0x14D98588154500BF),
                ymx: GF254::w64le(0xB4DB83514C7A9404, 0x67AAF998856FAF37,
                                 0x1229D7E95DBC821C, 0x7E617A17A2F72BD3),
                t2d: GF254::w64le(0xE964CDBA7222695A, 0x677619CC40A07EAF,
                                 0x7F82C099A8DF7538, 0x2A219175EC95A1AD) },
    // phi(G) * 73
    PointDuif { ypx: GF254::w64le(0x755AC147B51FF3DC, 0x4A87F652F86823EC,
                                 0x6D8D4A923F50278D, 0x4BB952AC98C0120A),
                ymx: GF254::w64le(0x968C57A6A31E482C, 0x0855A11481FD5653,
                                 0x3F05DB6AC608D16D, 0x33F9E5746E1079C6),
                t2d: GF254::w64le(0x1F3458E3EC51F53A, 0x4AE3FC836CECCF81,
                                 0x3C0B2E2DB5875DDF, 0x42336A1262CBB5E0) },
    // phi(G) * 75
    PointDuif { ypx: GF254::w64le(0xE3651453CADC3868, 0x25081CFD6E80A2DE,
                                 0xD4CB31092872E53A, 0x16CA9349A11A9C37),
                ymx: GF254::w64le(0xB1D3AE440D1CB675, 0x41B2D6ECBCCBD6A4,
                                 0x475E6A844C3D0CA1, 0x2CD0E0DEDBF07023),
                t2d: GF254::w64le(0x85AD446DDB002A6E, 0x72A06E5419A64609,
                                 0x9E779387E9A3276C, 0x414A8163A9408B10) },
    // phi(G) * 77
    PointDuif { ypx: GF254::w64le(0x25C7B53C1791333E, 0x3EA57190B42CD838,
                                 0xBF20B346B094F121, 0x47570CBA99B06C9D),
                ymx: GF254::w64le(0xE6BD01C8746CB5F2, 0x3C0B0B8C4C0968EF,
                                 0xB22009690E243975, 0x251737E4A5643DA2),
                t2d: GF254::w64le(0x3CDD49123AB89DEA, 0x68748CD1E3CC45A6,
                                 0x563746685EFFEA7B, 0x4E4C5B1C86EB3A29) },
    // phi(G) * 79
    PointDuif { ypx: GF254::w64le(0xE1BA017516D32070, 0x5CDD35A0C4BA93A3,
                                 0xDBC66A0C7DE30288, 0x22107156A0F700F1),
                ymx: GF254::w64le(0x0FB69045AAC0F647, 0x111DCB9763D08BC0,
                                 0x266DB39F6D78CCED, 0x02A32587C7033892),
                t2d: GF254::w64le(0x76FC94CE6A2A4B19, 0x474DB0F12FCFA96F,
                                 0x0C44584C08377AC7, 0x5F435BF43140F4C0) },
    // phi(G) * 81
    PointDuif { ypx: GF254::w64le(0xB9741C3014EEF7A3, 0x54596C23B536FF04,
                                 0xEADF56BB6EA39450, 0x32F24F6E1A656B10),
                ymx: GF254::w64le(0x21422E4DD5F54E3F, 0x0D6AD57853660607,
                                 0xF6F62FFDD0BF9928, 0x72569C930015CAA7),
                t2d: GF254::w64le(0xF4293579931B9216, 0x049D6A4057E6827E,
                                 0x6223E20060BE0E05, 0x20D91AE969DFA9A4) },
    // phi(G) * 83
    PointDuif { ypx: GF254::w64le(0x02611B345456D47A, 0x601DD413D1BDEA0F,
                                 0xE6B017B26BBC9BF8, 0x63399FF3D6542359),
                ymx: GF254::w64le(0xDBDFE225045A9764, 0x10ACD93346649BEB,
                                 0xC652D5A50E0535CE, 0x49EFBD5639C4CAF1),
                t2d: GF254::w64le(0x65A5DBD8A304DE65, 0x08DDEBED0E865BE8,
                                 0x5DB8337D5E715261, 0x34CF4C75496807E2) },
    // phi(G) * 85
    PointDuif { ypx: GF254::w64le(0xD840C7416E44B56A, 0x10FD30D282D8B151,
                                 0x36FFE6DF2C1C9568, 0x66D8A38B6D31A2B1),
                ymx: GF254::w64le(0x01FAD3AA61984774, 0x412A9FD87B303D90,
                                 0x2720945EE0F0EC9E, 0x0C91B4C7EA84CF37),
                t2d: GF254::w64le(0x98462F25FD5832F0, 0x6F4CD578C490D842,
                                 0xECC7D24C31ED3342, 0x580AB96994515FD8) },
    // phi(G) * 87
    PointDuif { ypx: GF254::w64le(0x6D8A97ED98465B3E, 0x16995DC010908AE3,
                                 0x50626A4E555B774A, 0x082636E5A8A9B568),
                ymx: GF254::w64le(0xA99435CC4823B413, 0x41FC423D10EFF4E7,
                                 0x114236DCE6F9F9DD, 0x6C3995C4BBE0AADC),
                t2d: GF254::w64le(0xF3F22C975935753D, 0x6B1B3F27EDEC2A78,
                                 0xDBADAAC32CCC292E, 0x3856036F8A3795AA) },
    // phi(G) * 89
    PointDuif { ypx: GF254::w64le(0x947154CAAEC01D73, 0x0A22E573E3F0F49B,
                                 0xC50C949F39C184A3, 0x2AADD0868535D0C8),
                ymx: GF254::w64le(0x22BC5BBE5F992446, 0x15D36ADFCA3ACE90,
                                 0x038010E37A6308F9, 0x161B06D8D7180307),
                t2d: GF254::w64le(0xCFBF4E3ABEF8D056, 0x2A1765FE9C7696BA,
                                 0x6A15D44CE18EF392, 0x5405239C0369DE64) },
    // phi(G) * 91
    PointDuif { ypx: GF254::w64le(0x5FABDA1210F58E29, 0x40CBB03974B37035,
                                 0xA29FDF2875322520, 0x3B32ACE85EDAC547),
                ymx: GF254::w64le(0x0F0C92B41D679DF8, 0x7F07ECD47A7D2F0C,
                                 0xB5FC65C05ACCC95A, 0x0E8B1DA70636F221),
                t2d: GF254::w64le(0xB2EBD131F4E8A846, 0x7DF51E4ABA57F391,
                                 0xAA2F3D40FEF689ED, 0x0EE1E115FDE5D582) },
    // phi(G) * 93
    PointDuif { ypx: GF254::w64le(0xF7D025B42E240AE6, 0x29FC1BEFEB526AF2,
                                 0x7C5FFCAFF205E565, 0x4CF4D0D8840E2E1E),
                ymx: GF254::w64le(0xB8B00D1810AD0FF6, 0x44D3AF686BA915FF,
                                 0x86A8FD1EEEA8D08C, 0x3EB300ADCF6EDC4F),
                t2d: GF254::w64le(0x8DB03C266B588186, 0x289D0FD301E96881,
                                 0xBA83BA260CCCC170, 0x26EE69546CEB0C77) },
    // phi(G) * 95
    PointDuif { ypx: GF254::w64le(0x1109D8BF92C4EA05, 0x033AA036671937D1,
                                 0x4BD9902E5A664A0B, 0x42BD48ED44FDBB71),
                ymx: GF254::w64le(0x7359E19357A9622D, 0x0D6EE92855DAE22F,
                                 0xC24DEBB323643859, 0x4C60FEE1E191766E),
                t2d: GF254::w64le(0x3BEAEC0E99FAA328, 0x056C2AE1709C5B0A,
                                 0x7FE89E0C62710909, 0x7E3B5CD3AC4E6CE1) },
    // phi(G) * 97
    PointDuif { ypx: GF254::w64le(0xE9D06486AC7370A4, 0x4B1A8C62E99F9429,
                                 0xB11A50E20BC3197F, 0x75EC513C25DAC300),
                ymx: GF254::w64le(0xFB9FD064B1466DCA, 0x290379CFCE59308C,
                                 0xCA3EE3FB7DB99943, 0x2AF7A3E930FAEA44),
                t2d: GF254::w64le(0x0D294E6D1505E35B, 0x7D534585181E001F,
                                 0x90285700831D4CFE, 0x419F25105D06C90E) },
    // phi(G) * 99
    PointDuif { ypx: GF254::w64le(0x5F71E79F5F828172, 0x02921E2A43326798,
                                 0xA0981553E84D4A6A, 0x220C82041938573D),
                ymx: GF254::w64le(0xFD2B5B78EF20C927, 0x3C99A2DC611CADDB,
                                 0xFB1247FD99ED2828, 0x4B3A3739F724890C),
                t2d: GF254::w64le(0x7775EA2D7D2D1017, 0x3AB07CB5BA8AC987,
                                 0x82E5123A20A6B5C3, 0x44965098AA82161F) },
    // phi(G) * 101
    PointDuif { ypx: GF254::w64le(0x20948C77E9AC4C0C, 0x521E934AB214157D,
                                 0xC8F4F4052DFFEDAB, 0x1DA963C2EF46F27F),
                ymx: GF254::w64le(0x3BE7631E212FA2E0, 0x0D188E88D1A4184E,
                                 0xB4483ED385DE4BAE, 0x4FFADFDE83D2B0D9),
                t2d: GF254::w64le(0xACEBD9A51A938608, 0x40968C0C9302B0E8,
                                 0x85704404D06F3A5D, 0x3E9F477A61A26D37) },
    // phi(G) * 103
    PointDuif { ypx: GF254::w64le(0x1DA1EFC7CBD18D12, 0x4FB87A47B9F2CB04,
                                 0x7556A45E8B5C8CAF, 0x7F6991B7723B35CC),
                ymx: GF254::w64le(0x3FA10A169532635F, 0x15E61B1CD72BD52F,
                                 0xE6B45DC3B4667C21, 0x45CF3BD4BBF39BAF),
                t2d: GF254::w64le(0x7343B0636A9D63F9, 0x457551C49AC49567,
                                 0x331E611A3FCEC018, 0x7D19E2584756B92D) },
    // phi(G) * 105
    PointDuif { ypx: GF254::w64le(0x78951DF174059655, 0x0573CD896A793337,
                                 0xB3E37121FD458870, 0x3CC032B1A1BEBC3C),
                ymx: GF254::w64le(0x2571DD06D24D5A41, 0x017382EC4AA29FFA,
                                 0x6CDA850C15A224ED, 0x6AF59BEE2D7586D4),
                t2d: GF254::w64le(0x287D3C4027F80EE9, 0x6AA570B9E51D4F25,
                                 0xF29F327C5E0490D5, 0x00FB62F93F43EDFB) },
    // phi(G) * 107
    PointDuif { ypx: GF254::w64le(0x7B06E602DC313277, 0x5D8DC98E723B039E,
                                 0x5BB61813041A589A, 0x2A4C9F13EEF7F1EC),
                ymx: GF254::w64le(0x9439EDCB4BBABA6F, 0x027F4D494E7784AD,
                                 0x087AE2A2FD6BBC8D, 0x230F37BA41AEC2FF),
                t2d: GF254::w64le(0x63876E43DAAAC09C, 0x28ABD7AE6E17DBE3,
                                 0xD354D50CF000982A, 0x1DD774A1273AEA75) },
    // phi(G) * 109
    PointDuif { ypx: GF254::w64le(0x243658930D4B0902, 0x0DF50723A2DA63D7,
                                 0x22BC07B9AC9628C5, 0x134123D68AA939CC),
                ymx: GF254::w64le(0x4E84EE2CF0D450E2, 0x53A8C6DBD4AA9ED1,
                                 0xD06E741C45610565, 0x608DA7F96F2F7E19),
                t2d: GF254::w64le(0x59B7FC9FE6A0243C, 0x0DA36BB46FD1EB3D,
                                 0x09A11DE836914182, 0x3BECC1CC0B96F1E4) },
    // phi(G) * 111
    PointDuif { ypx: GF254::w64le(0x820B8A4CAD71C17F, 0x2A425DD0204A843C,
                                 0xF6F7FDAAE1523C28, 0x5FB74C0C961E6FB1),
                ymx: GF254::w64le(0x0C76E0F72B7845A2, 0x273DB117946CE778,
                                 0x7A22D35CDEA5934F, 0x73AEEB1B24265D5D),
                t2d: GF254::w64le(0x938A618552E4392D, 0x6050215BEB6C1923,
                                 0xF32F6AB781EFBF2F, 0x2E4ECE5C476E1354) },
    // phi(G) * 113
    PointDuif { ypx: GF254::w64le(0xF2A4A59613812356, 0x555185DA018933FD,
                                 0x2FFFBF95863BCE54, 0x72644F9C3181E7A6),
                ymx: GF254::w64le(0x98C6B1D509E3D624, 0x5BDDD5730939D7D0,
                                 0xDD197613D550FBAD, 0x7671FAFA1FACB923),
                t2d: GF254::w64le(0x13DBB61148C5B802, 0x616BC5C73CCDC3BD,
                                 0x0B175B4C46FD8871, 0x498A1EEB000AB870) },
    // phi(G) * 115
    PointDuif { ypx: GF254::w64le(0xA49F1CA2D7802521, 0x6906346CCE00BE5A,
                                 0xF1BC33C727DD52B0, 0x5D005FF3122FD749),
                ymx: GF254::w64le(0x51318AD5D7C622E7, 0x50F93D6D15E46E82,
                                 0x88DFA2123FFFF3B9, 0x3848E6FCE3CAC6E5),
                t2d: GF254::w64le(0x6CEFC31A33EA4F5E, 0x0CC5E7DC4E5E144F,
                                 0xEE2009402E59A7E2, 0x257679FDB86F4712) },
    // phi(G) * 117
    PointDuif { ypx: GF254::w64le(0x4CF68953D8B17E83, 0x710F970C16CE2070,
                                 0x4000B8E9E51E6AAD, 0x5AF48DACD01F24F6),
                ymx: GF254::w64le(0x209679D5D3FCC916, 0x0A3538DD7CBE8232,
                                 0x2D6D7ABA44D990D2, 0x46C718F2D4B2C1A6),
                t2d: GF254::w64le(0x9953D799A378233C, 0x4F4E80F4A682E7A0,
                                 0x9912F04ACBB77EEE, 0x317432079A195B2D) },
    // phi(G) * 119
    PointDuif { ypx: GF254::w64le(0xACCCCDA6A1C11E3B, 0x3FD895817D0F3BE2,
                                 0x016DB17673F750EA, 0x635FC619A24009B6),
                ymx: GF254::w64le(0xB8447AB3370DA1E7, 0x6C893AA19ABF4221,
                                 0x5F35AC703D8508D0, 0x13533D324D4ADCB5),
                t2d: GF254::w64le(0x84610370DECE8512, 0x2223F126F9A70F4B,
                                 0x18F00D60F3BF6A04, 0x174BD78B20EF8543) },
    // phi(G) * 121
    PointDuif { ypx: GF254::w64le(0xEB179BC6A1698189, 0x732BF44A62015302,
                                 0x98352342BC0E4BC6, 0x053F6640C1549E85),
                ymx: GF254::w64le(0x65EEE8B0397C7CE8, 0x790451F39F2FA27B,
                                 0x36FFA0CB286CDB97, 0x46D07CEC4C967BF2),
                t2d: GF254::w64le(0x7C849ACE30868412, 0x6DEE239D339EF499,
                                 0x8AB78548F273E57F, 0x01C5BEBD8B7F5EF0) },
    // phi(G) * 123
    PointDuif { ypx: GF254::w64le(0xE440E5F042EAE93B, 0x65583F57FE057DB6,
                                 0xE6D5D26C24A565C9, 0x6B3B87A0A6AD702F),
                ymx: GF254::w64le(0xD3F5D533117B8E64, 0x4ADDB9D0DA92DF89,
                                 0xF1BD51990E0F9BFA, 0x30C624EC1DBCD0A4),
                t2d: GF254::w64le(0xAFAF2F00DA7023A0, 0x3086E132B54574E4,
                                 0x93BDBD4BFD3DD8C7, 0x690976EE132C892E) },
    // phi(G) * 125
    PointDuif { ypx: GF254::w64le(0x86FC11C79524D198, 0x0F6B95662E02C734,
                                 0x5B78BB385564F568, 0x55C9B3F55D7CD16B),
                ymx: GF254::w64le(0xDF1316434AD1C07F, 0x093D67D3FDF312DE,
                                 0xA1FD2257EA57B3D6, 0x4B5B18ABE4B54439),
                t2d: GF254::w64le(0x66C28F5B59D796B2, 0x7BAFFE6E642FDEA4,
                                 0xB9D3753265E68AE4, 0x40903BD6DFB02D6F) },
    // phi(G) * 127
    PointDuif { ypx: GF254::w64le(0x357958D4D72D6BC8, 0x179330DEA4659DD3,
                                 0x5A9CA85BC8721AEF, 0x0209F09E03C9B225),
                ymx: GF254::w64le(0xC0BF2E9738933495, 0x5E0DDE4D715E50C5,
                                 0x2743C96B66A6B951, 0x6AF96188A0D6D358),
                t2d: GF254::w64le(0xB2F3C72820F2A709, 0x5E9B8FD43327D9A0,
                                 0xF0B13F5324012177, 0x7ABDEAF4F741BACE) },
    // psi(G) * 1
    PointDuif { ypx: GF254::w64le(0x6F006249351471F7, 0x3204EB91CFE9ED6C,
                                 0xE09AF1C83C13AFA2, 0x6D70ED88D5DE535B),
                ymx: GF254::w64le(0x2078873D1A2FAA1F, 0x5C73BEDB8D96F3DA,
                                 0x41BBB407A3A1CE1D, 0x7A40EC2FB54EEA85),
                t2d: GF254::w64le(0xD6D569CB9DD722E3, 0x10ACF67805927B6A,
                                 0x27C61D818CC0EA05, 0x57B175C9F59904E2) },
    // psi(G) * 3
    PointDuif { ypx: GF254::w64le(0x4F7B40BC92B5A60D, 0x51431F647B46B89A,
                                 0xCD84DD55CC2A720E, 0x6B36059700809A1C),
                ymx: GF254::w64le(0x78E3E5DD060E9A0F, 0x630C0C1A146C77D4,
                                 0xC9925B0DEA8FEE2B, 0x4728F0604B16A06D),
                t2d: GF254::w64le(0xB4601050635B2318, 0x2484F7281864709B,
                                 0xBE2ED2A2523211DB, 0x6425D4FF23DD3A5B) },
    // psi(G) * 5
    PointDuif { ypx: GF254::w64le(0xF0868C09017AEF5E, 0x2733D1E1ADC6D5EE,
                                 0xA631DB49F17F87E9, 0x36D753CED54D5727),
                ymx: GF254::w64le(0x451D17FB6C4AF537, 0x1DCC4D611DD55B04,
                                 0x0BB8DE0C8D3E549B, 0x2FB2CA1271592C3D),
                t2d: GF254::w64le(0xD877914FFBC31CED, 0x190809A196504D10,
                                 0x44BDD65A970277E3, 0x13195C678B4B01FA) },
    // psi(G) * 7
    PointDuif { ypx: GF254::w64le(0xE69A41A54F84D41F, 0x61C7C870565E4508,
                                 0xECA2D2FC6F0E1C9B, 0x7F065480E257152A),
                ymx: GF254::w64le(0xFAAA9F7C3A8873B0, 0x43FCDB8DB58A324A,
                                 0x969A79026E9DA7A2, 0x4EAB135AF328B9D9),
                t2d: GF254::w64le(0xB38AAAFE87F85F7C, 0x69EBA4FE1A6B6F32,
                                 0x5607F6C6B4D27CBC, 0x273072BEA774F9E7) },
    // psi(G) * 9
    PointDuif { ypx: GF254::w64le(0x3C1149E3C8D51DB0, 0x161F8CD433C28BFA,
                                 0x765A61F218FE70DA, 0x442B5D405F2036BB),
                ymx: GF254::w64le(0x96F790271C564CC1, 0x3D5DBB33505CC956,
                                 0x621A38B446AF395C, 0x2DA978B45BB70CE6),
                t2d: GF254::w64le(0x755ACA711DA49388, 0x46F2E33E55E86DF8,
                                 0xFC5B454D5CB7BE24, 0x67DF47D68D8F6D12) },
    // psi(G) * 11
    PointDuif { ypx: GF254::w64le(0x7A1E224893898AAD, 0x0400219C89C2D13E,
                                 0x6C969E4D63D460D9, 0x4DF64D5DF8B60AD2),
                ymx: GF254::w64le(0x1FEED05A45FF89ED, 0x290C4B59E684B4EF,
                                 0x97FFBC3DF096ADB6, 0x4AC6037E76561C96),
                t2d: GF254::w64le(0x1BC40299115E51B1, 0x7169E0A1D96AA1BE,
                                 0x43F55F8B6BAC596C, 0x1CC6A0603081A178) },
    // psi(G) * 13
    PointDuif { ypx: GF254::w64le(0x8E1D2DB69BC925D0, 0x6FFB86EED51D2931,
                                 0x3AD1EB242E0AF1B5, 0x338198152FCD6D7C),
                ymx: GF254::w64le(0xC1F381496DF13943, 0x05D9242FE1C60B02,
                                 0x39617510DE7EEC81, 0x24D8BA5AC76B12B8),
                t2d: GF254::w64le(0x280EB2DB9E548483, 0x6C51317B3A8A93F0,
                                 0xB2A9F90939BD1235, 0x2DA9DE86C39F9AA6) },
    // psi(G) * 15
    PointDuif { ypx: GF254::w64le(0x7F54917103127B97, 0x7BE2BE5AD3276169,
                                 0xC969D703D31E9DA7, 0x0500DF3BBB1F8A4E),
                ymx: GF254::w64le(0xEA05C77685795917, 0x049575A992D09345,
                                 0xD567F8DE2DAABE35, 0x383FAD35A8E035CB),
                t2d: GF254::w64le(0xB9353EB2BBD43D56, 0x52B3953221860C5A,
                                 0xF9E4BCD46DBEC03E, 0x4B0DB0B4A7B3279C) },
    // psi(G) * 17
    PointDuif { ypx: GF254::w64le(0x8CC5F6B6E1FF80C0, 0x1BD2CE464B552215,
                                 0xD008EB25B39C4236, 0x3B4CE5BB2F42A9FC),
                ymx: GF254::w64le(0xE1F249681D153D9D, 0x3E022CB14BC4C5B9,
                                 0x8A11D021C8ED5A53, 0x560D3FB258BEC495),
                t2d: GF254::w64le(0xF4405852705A6012, 0x5C8BCCD2B1B3EFD3,
                                 0xD93C0F63BA7CE0C3, 0x337798CB3E93DBBA) },
    // psi(G) * 19
    PointDuif { ypx: GF254::w64le(0x7A9F68CF800C8E88, 0x579AFE689F3EBCCE,
                                 0x7DD41D6CDFBDB4A9, 0x3802410C4E1B274E),
                ymx: GF254::w64le(0x64241D770CF0DB02, 0x2F7C8133C74BDE23,
                                 0xF3C3FD835ED1952E, 0x741B1D88A3CEE37B),
                t2d: GF254::w64le(0x74E1AE644683C68F, 0x0C80DD9E0F7A91E1,
                                 0x3984D741F3E47C24, 0x4B3EB97B6A39D252) },
    // psi(G) * 21
    PointDuif { ypx: GF254::w64le(0x32E9B9410DA9A195, 0x11D09FDC04EC3B41,
                                 0xF92FD5E53CDDEA30, 0x296E095589E0CE05),
                ymx: GF254::w64le(0x4E3200C3A283B696, 0x7E33FBBA44ECB32C,
                                 0xED3C039790AD0033, 0x5C8EBB260B5EC084),
                t2d: GF254::w64le(0xA667455BB79D2E9D, 0x12FBEC9D4F5BB155,
                                 0x3AA5F6BB4D0D8D49, 0x0CA652ED7065D80B) },
    // psi(G) * 23
    PointDuif { ypx: GF254::w64le(0xB7938753D51C6F83, 0x41644AC1A602F9F2,
                                 0x84223D4D63C38F7D, 0x71057B4B8B931282),
                ymx: GF254::w64le(0xD39FA015165F47B5, 0x7536C8A19C33C201,
                                 0xBE713CA4166C2DAD, 0x456C98C2B4198511),
                t2d: GF254::w64le(0x4793F25E1CB44658, 0x1D002F1CFE1A1BA7,
                                 0x9F9ED6E1E1A27957, 0x095DECE028426BDB) },
    // psi(G) * 25
    PointDuif { ypx: GF254::w64le(0xE57D3412FC1001D6, 0x481C63A0D9B25E99,
                                 0xC756B6BA0DC02AA5, 0x24AF047D79ED4683),
                ymx: GF254::w64le(0xE37AC10133B68275, 0x418B45E570802012,
                                 0x87578DEF0C3900CE, 0x7C5661923B8C9740),
                t2d: GF254::w64le(0x5F4AB0A6FDDA7366, 0x0AC6100825E4EB3C,
                                 0x308528E42C9E4D32, 0x436E5979933DDDE8) },
    // psi(G) * 27
    PointDuif { ypx: GF254::w64le(0x0CD6EBE123352222, 0x63D1768A46F33DC7,
                                 0x96CC55DFF38C9273, 0x474438DA7140411D),
                ymx: GF254::w64le(0xA184B89B81CF6402, 0x6BF820A3AA675050,
                                 0x3BD4720417391F0E, 0x3F2B8F859A8E0CBA),
                t2d: GF254::w64le(0xED952561B125DA29, 0x07EB1AC74165097D,
                                 0xC3F70D0C7DB0A9FD, 0x5AB896A489294A6C) },
    // psi(G) * 29
    PointDuif { ypx: GF254::w64le(0xD4B608975C20018D, 0x6243B039F25D0456,
                                 0xF766E98FC24C7464, 0x20035C09D2291E42),
                ymx: GF254::w64le(0xCC0E5B5EEB462524, 0x24BCBA5505F90657,
                                 0x43A98D98E4FA9BF6, 0x3B621EC4188264D4),
                t2d: GF254::w64le(0x633472FE235C812C, 0x31A20844A3316D23,
                                 0x47B80DB7D7F5D0BD, 0x22D482F5663780F9) },
    // psi(G) * 31
    PointDuif { ypx: GF254::w64le(0x4DF227DC52142020, 0x25076D0624BF137E,
                                 0xCB4A6EE30A657645, 0x0CE469DBB5ADA433),
                ymx: GF254::w64le(0xFDB06251F65B9C5B, 0x44F82274A8E8F538,
                                 0x98FA4C81CDEC4B97, 0x0CCD61D1ABB61D0D),
                t2d: GF254::w64le(0xB9DC371344C5AB54, 0x35DCD9CCF8E5F919,
                                 0x67FC81F369BA5722, 0x121B5AA1AF6024DA) },
    // psi(G) * 33
    PointDuif { ypx: GF254::w64le(0xE0B1B16B0FB1F1FA, 0x4DC688D6D3B1805B,
                                 0x05C187CF10E40104, 0x71AF39C743DAACD9),
                ymx: GF254::w64le(0xE691E97F82ACF4B3, 0x0C46305B9243BF5B,
                                 0xB063AF137FDE616B, 0x4E26E72A1DE067F6),
                t2d: GF254::w64le(0x61FE66D01A221004, 0x172FE9240CEA50B1,
                                 0x4FF50D37B2EFFEFC, 0x06BE02AB0B89AA5D) },
    // psi(G) * 35
    PointDuif { ypx: GF254::w64le(0xDD4AAB96717AF213, 0x32322555B58A7FFC,
                                 0x7812AA965889326D, 0x1BD608F60D6457A4),
                ymx: GF254::w64le(0x2C7B6B44E999E141, 0x113A86A87856A8A8,
                                 0xD95469FC33814855, 0x4A18DC36F6BFD586),
                t2d: GF254::w64le(0x0706B60BDB854FD3, 0x4DC356685650FA90,
                                 0x24EF7CFCE41F8DCC, 0x19049C3E632DEAE8) },
    // psi(G) * 37
    PointDuif { ypx: GF254::w64le(0x5C9A4E28B7138A89, 0x0F0B7DBC1E5087E2,
                                 0xEBF49CDC66A362D2, 0x19E4B815E6576C85),
                ymx: GF254::w64le(0x1896051EE3B6063D, 0x09ECC741852A68E4,
                                 0x4009034DEF986795, 0x36B440FF39B4B5E8),
                t2d: GF254::w64le(0x9BC2647EE28AF1CB, 0x62613C9DD152B3A8,
                                 0xC2018AE5DFAE5F2D, 0x29CE5EF30009C855) },
    // psi(G) * 39
    PointDuif { ypx: GF254::w64le(0x0B653558B21D2B1C, 0x45E2C505D1F74936,
                                 0x48304373240553D3, 0x0528569885A82310),
                ymx: GF254::w64le(0xA90D402E33924181, 0x5E610EDC23CB9555,
                                 0x28890AE7E007D28A, 0x7E5132B6B1EBAE37),
                t2d: GF254::w64le(0x0D5252EB7C94CB1B, 0x308DDAEA1FDBB672,
                                 0x99FAC0B431730534, 0x77D54ED63B9325B9) },
    // psi(G) * 41
    PointDuif { ypx: GF254::w64le(0x4D647BCB76C6EC3F, 0x0E968B22EC2CAD86,
                                 0x4B22B5EC30B08A35, 0x3B31DF3B52326B5C),
                ymx: GF254::w64le(0xBE84F638DAC3105D, 0x7DB085F133ECBED3,
                                 0x7A8B694596F2CF2A, 0x67B2E6C15D16E0AA),
                t2d: GF254::w64le(0x4808B20BF173011D, 0x25D5FBBFBE66F864,
                                 0xF67F3F3CD9743987, 0x654250E89617DDF3) },
    // psi(G) * 43
    PointDuif { ypx: GF254::w64le(0xF5A1A7E0BA0A88C0, 0x3616C781799AB50A,
                                 0x2669C27A2D256902, 0x3A8EC380E12FD7DD),
                ymx: GF254::w64le(0xA25361F44A418E30, 0x2942F3001D233645,
                                 0x60F1D3B7535A4133, 0x14DEAAA12E5C7BDF),
                t2d: GF254::w64le(0x0089FBECE10C8D6F, 0x4BF7C313757C803D,
                                 0x65AA30BFBB70567D, 0x4FED47AF409A3FB3) },
    // psi(G) * 45
    PointDuif { ypx: GF254::w64le(0x07557DD875D3DAF5, 0x36C49C2380E3C9BB,
                                 0xA21F643D329AE02F, 0x6CF6F7474338BCB0),
                ymx: GF254::w64le(0xB5DF78136A0F3012, 0x031FB2DF2E00E9D4,
                                 0x4D86FCCBE75E79CD, 0x23F890E082D03B7D),
                t2d: GF254::w64le(0x5716A1FFB50A8262, 0x0199B50AA6CF3302,
                                 0x6A1BE351F86090D5, 0x36095EFC13349364) },
    // psi(G) * 47
    PointDuif { ypx: GF254::w64le(0xFFE752BE8CE46920, 0x65047A340B652F65,
                                 0x320EE55FD03156A6, 0x5AF6AA45278409F6),
                ymx: GF254::w64le(0xA6CAF283B1CF3850, 0x4E3A988F61072F96,
                                 0x750F67926B18F680, 0x09FC3F2927D21A4A),
                t2d: GF254::w64le(0x914893C2F2CE1169, 0x4D15B367121B3E75,
                                 0x6CB12559723774F2, 0x3EE5B8C2A70E054A) },
    // psi(G) * 49
    PointDuif { ypx: GF254::w64le(0x7DD9B3518D84D2D7, 0x147D5A5A53F57A58,
                                 0xE1BD0904AD842A05, 0x3A0F3B029C9A5845),
                ymx: GF254::w64le(0x7153C03261410074, 0x4E203D6737058C17,
                                 0xEBECF5CB79F28AF9, 0x574B889870C279F4),
                t2d: GF254::w64le(0x326317B005F444A4, 0x7480DA44B34F4B1E,
                                 0x7C5F21CDC46275B2, 0x210494B9EE24E4E0) },
    // psi(G) * 51
    PointDuif { ypx: GF254::w64le(0x3CBF6CA1F4AA4EAD, 0x6BF3872CCBFED940,
                                 0x19E8A84673A566CA, 0x61A80E16990401A2),
                ymx: GF254::w64le(0xEA2E029E7F9B3824, 0x5762298465F0EBD3,
                                 0xF60E36D4969F9AF0, 0x00B826180531C799),
                t2d: GF254::w64le(0x17120EC95CF3C61D, 0x47196CD6DE85C7D0,
                                 0xB0D47CFF46A5CBA3, 0x29271400D7EDE26B) },
    // psi(G) * 53
    PointDuif { ypx: GF254::w64le(0x835908353516B894, 0x4BC57F8C1EEDEC8E,
                                 0x2EC5DEEDE5C0DB5F, 0x7B9FC48AC4A689FB),
                ymx: GF254::w64le(0xF82CE6DE88FC10E5, 0x6C5D84A70E03A3D6,
                                 0x88A211FC4EA531F9, 0x7D5583E5918AA03E),
                t2d: GF254::w64le(0xBDF2D70766FB8F39, 0x5926497E734AB18A,
                                 0xD6A9872B800CACB4, 0x757C1CD521FD22D6) },
    // psi(G) * 55
    PointDuif { ypx: GF254::w64le(0x22D50B0C13EC4BC0, 0x288A77D34A15E99A,
                                 0x95C8E78FCED3D4EB, 0x45ECE109C15BE169),
                ymx: GF254::w64le(0x878EF262D0132128, 0x48110E9FD98939D6,
                                 0xE3FC5425D2E7741E, 0x050CA6E71F599C65),
                t2d: GF254::w64le(0xE02F97605D9FE375, 0x2AF48B9BFEE410E4,
                                 0xFD34A1C107229A54, 0x43DC6F0CDCBD41FE) },
    // psi(G) * 57
    PointDuif { ypx: GF254::w64le(0x15B4EB7D65CC562B, 0x369A7B0DD3E91248,
                                 0x2B087611EDD32810, 0x116B234DDCE09D7F),
                ymx: GF254::w64le(0xCDB03CAE8E90D2B0, 0x4017D51587566038,
                                 0x081793739242B600, 0x5086E8E633CD52A1),
                t2d: GF254::w64le(0xF5DDAEE155CB8087, 0x773311B60D59A7E9,
                                 0x36E5AA0ACADF2068, 0x7126A4281B192882) },
    // psi(G) * 59
    PointDuif { ypx: GF254::w64le(0x54A10DF54F7ECEF8, 0x3CD7D2FBB6E33F67,
                                 0xAC31EB6C3E740C25, 0x517DB54840FEB2DE),
                ymx: GF254::w64le(0xF17CB269B3CE27A2, 0x04A8FECD1DCC99E7,
                                 0xFC887C1F2F85A2DA, 0x280DA7425BB55B01),
                t2d: GF254::w64le(0xA1AF72F5256A5A53, 0x71DA839FC459F465,
                                 0xC203FE7BA6587F71, 0x08A4201F77A4F335) },
    // psi(G) * 61
    PointDuif { ypx: GF254::w64le(0x6CB9EA5683014D96, 0x5DA17076B6B51AE2,
                                 0xB55AC168C3E3997F, 0x41B9A32373D78F7A),
                ymx: GF254::w64le(0x96F58033B8600A50, 0x6EBFBA3EC9D956CC,
                                 0x0FF8883707D66D0C, 0x2F562B035445226F),
                t2d: GF254::w64le(0x2388FC015BD368C7, 0x2B7D802CE27F627E,
                                 0x301F0369C24083A6, 0x77E139F6DA8D5AAA) },
    // psi(G) * 63
    PointDuif { ypx: GF254::w64le(0x9F78574697FCE43C, 0x02726C94565421B6,
                                 0x1AD6007338E26585, 0x6134CC5EB35C02FF),
                ymx: GF254::w64le(0x77AE739C9CDCD1E1, 0x04E96543233C7A13,
                                 0x97D3926DCDED2E10, 0x6BCDFF7E14CEBB73),
                t2d: GF254::w64le(0x9C46AE2B32489774, 0x04A97B9A0473AF8D,
                                 0xB0350BD910D9784E, 0x448212D3E2164AD7) },
    // psi(G) * 65
    PointDuif { ypx: GF254::w64le(0xF3464E0351F5E995, 0x68AB4D24B3ADE8D6,
                                 0x86854D534002AF20, 0x613F7FFE5DE92AEB),
                ymx: GF254::w64le(0xB385B4F4608A370A, 0x220DCCECBC6F2688,
                                 0xC31EC5384ABD3680, 0x25A82841A2000FD8),
                t2d: GF254::w64le(0xD19E422504694236, 0x0BC1124D541781F5,
                                 0x0808651EDCD99176, 0x41B81F223D429C76) },
    // psi(G) * 67
    PointDuif { ypx: GF254::w64le(0x1A6DCB2662CC80C6, 0x0B101FB0EF0D1F74,
                                 0x6F02AED8F8327119, 0x5B4C5176CCC4A340),
                ymx: GF254::w64le(0x8FCEFD200D6EE8ED, 0x0548127287F44749,
                                 0xE1EFECA1FADD1341, 0x0E74BC189DC9016C),
                t2d: GF254::w64le(0xE90470353F46CB12, 0x69513D3455BC890C,
                                 0x9503686F1F2497D1, 0x280A0BB7733F1086) },
    // psi(G) * 69
    PointDuif { ypx: GF254::w64le(0x14E5F99930A91DEA, 0x7840AD84B03C3878,
                                 0x46E32C654FDBCEB1, 0x7E88D2822BB2CECF),
                ymx: GF254::w64le(0x4D78A8AED7F8661D, 0x70EB17416EF40180,
                                 0x97B6F1733C474A10, 0x3D0D27FC4C7084EF),
                t2d: GF254::w64le(0x730F60F6A1EE0D71, 0x7BF6E3885D3D9302,
                                 0xA1E8AF33742F1611, 0x73B798EC129822ED) },
    // psi(G) * 71
    PointDuif { ypx: GF254::w64le(0x0F669BB094642A70, 0x142927DE789FC4A4,
                                 0x0DB18E01FA98CBD7, 0x6AE4D37674BE1451),
                ymx: GF254::w64le(0x7175E98F178B4B74, 0x40534E319BC52C6C,
                                 0xB7211D252C4DB879, 0x1A7651F8F3ED1AAE),
                t2d: GF254::w64le(0x9C9A43932D50CC97, 0x630B232B7201C359,
                                 0x327D77575F5B3839, 0x5F0E19E78431864A) },
    // psi(G) * 73
    PointDuif { ypx: GF254::w64le(0xBFBB00B6530A3BB6, 0x19BA9D60D97F7857,
                                 0x759779DE744BD764, 0x5FACBE63177791E1),
                ymx: GF254::w64le(0xC74EA511C56A3B61, 0x1D8909E84083C31D,
                                 0xCD20094B507AF492, 0x2EF1B9C07C92AB37),
                t2d: GF254::w64le(0x8430ED9EF8494FC9, 0x3F9170E6DF5B1FA1,
                                 0x1FB8DBC837175D73, 0x65B961B58008D022) },
    // psi(G) * 75
    PointDuif { ypx: GF254::w64le(0x7E1AFB6816864B6F, 0x54C4B92C534871E9,
                                 0xC0A1DCD60D61EF84, 0x4390F0E992C41298),
                ymx: GF254::w64le(0x1E54E2C8B7C27348, 0x7A987E01A2EC308C,
                                 0xEE42FBD90C4A89FC, 0x1ED8C77F8D7C609D),
                t2d: GF254::w64le(0x569DEDACA99A3346, 0x0EB471E609FEF4ED,
                                 0xC915522A3B9FD03C, 0x726453B246746BFB) },
    // psi(G) * 77
    PointDuif { ypx: GF254::w64le(0x4ED3CAE53DC5FA4B, 0x1BF1E4B34B9FEEF6,
                                 0x0850DF9F0401FAC3, 0x0A58D33CB2422E2F),
                ymx: GF254::w64le(0x3D197F9603ECFC29, 0x45E46EDBA1CC432E,
                                 0x96C0C93310D9BCAF, 0x18DE3A458BE2C33F),
                t2d: GF254::w64le(0xC9E65E5BCC12A49A, 0x71A5345F0239B187,
                                 0x53B3B2F01C5710B3, 0x438350F57CE2EC4A) },
    // psi(G) * 79
    PointDuif { ypx: GF254::w64le(0xDBBD368A760391DB, 0x4033638DFEC29FE2,
                                 0x297AD75ED73117FD, 0x269C08D54B106E8C),
                ymx: GF254::w64le(0xA4E3E4FD238B4218, 0x1F48A1CB09208AAA,
                                 0x9575153115CF5FA7, 0x59FEEFF0876FB74A),
                t2d: GF254::w64le(0xFDEDB4AF6F368710, 0x79BE1FE79FA674D4,
                                 0x689D6BBB4C707C39, 0x394A451499057BB1) },
    // psi(G) * 81
    PointDuif { ypx: GF254::w64le(0x5887D4FB21FC43B3, 0x37628DFC4B5C23BF,
                                 0xC66B76944B34BD13, 0x6E97F0A8A45BCB36),
                ymx: GF254::w64le(0x3AC6B10139EDBBDD, 0x313F4846B6745833,
                                 0xF8758D9777CD9037, 0x02FDC98F02692537),
                t2d: GF254::w64le(0x9E79F381FFF833A5, 0x25AC5D68C49B105C,
                                 0x1E9F48A076D8C9EE, 0x788C85C9FE9543B3) },
    // psi(G) * 83
    PointDuif { ypx: GF254::w64le(0x776EA51DB3B3B778, 0x0007C44055B64DB2,
                                 0x3C392C2A82FDDD25, 0x65000203BE8EE976),
                ymx: GF254::w64le(0xEA119666AB7C50AB, 0x528B2700E8F82D39,
                                 0xC4AAF797118B8282, 0x55E5A7D5382E0D3A),
                t2d: GF254::w64le(0x15A80B22E89F1039, 0x199F68594B1247A0,
                                 0x8D5630750D622435, 0x2687F48CC6DEF5B2) },
    // psi(G) * 85
    PointDuif { ypx: GF254::w64le(0xA16B0C0259EAFAEE, 0x7AEB10834E93595A,
                                 0xE31BCF34CE679D9F, 0x4E2C19829EEE3C87),
                ymx: GF254::w64le(0xA46869CB8CA35C9D, 0x3CD35313C08504EB,
                                 0xA088ECA66E98389C, 0x44C562F0F7262740),
                t2d: GF254::w64le(0xD3EB8A28F447523A, 0x43A0E059BFE37576,
                                 0x0312C5D6D0F2E0AD, 0x5F30AAF0D1614C61) },
    // psi(G) * 87
    PointDuif { ypx: GF254::w64le(0x6F09A7A6E182B0AA, 0x575DB3D21A82296B,
                                 0x6599BB5EEE7925E6, 0x093F89458DCC2FE3),
                ymx: GF254::w64le(0x70C4AF785151FC84, 0x1230C0C519DE5480,
                                 0x0E66F8F93075A4F6, 0x5DE4A122633A5C6D),
                t2d: GF254::w64le(0xDB99CF83F9ECE1B6, 0x1C3ACD4A13DED617,
                                 0x4DFE69E68F59C447, 0x482BA1F7715A3C16) },
    // psi(G) * 89
    PointDuif { ypx: GF254::w64le(0xEFEED2A7C81EA8FD, 0x4E089EEB713A572F,
                                 0x78BC74ACFBDF322B, 0x4B4951CE8EB86FBF),
                ymx: GF254::w64le(0x0EAFB6B46AC6714D, 0x72913ED109F7D404,
                                 0xB498BF6FCDE9E3A2, 0x3C08A283EF5DED62),
                t2d: GF254::w64le(0x9AF09F593A48B346, 0x7ED52441D00D4980,
                                 0xA78E843EE5DF44AC, 0x25DB12D420A86151) },
    // psi(G) * 91
    PointDuif { ypx: GF254::w64le(0xEC840E7E89D049E0, 0x5A34CBE928BF96CC,
                                 0xD875DC5525DA882C, 0x2AF4442FC256827D),
                ymx: GF254::w64le(0x089FB428C2EF5A5D, 0x0B573ACE080A3D9C,
                                 0x6F57282554C240DA, 0x425CEDA6707B6BC9),
                t2d: GF254::w64le(0x94B5A8C3DDE824FB, 0x264F6F6A445B5DA9,
                                 0xADF292191C5C1EB7, 0x5E302E82FA4E5533) },
    // psi(G) * 93
    PointDuif { ypx: GF254::w64le(0xF51712FC44237F35, 0x2B0AF62C42E56E66,
                                 0x10392CB4D9C71B75, 0x4D7E08FE8457A95B),
                ymx: GF254::w64le(0x210B9ECEB04534BF, 0x73329D1C7D88E1E5,
                                 0x667A43FDB4BA79E9, 0x3435EC04276EDE87),
                t2d: GF254::w64le(0x38B8540A1A78B098, 0x4F6C266E6793BB78,
                                 0x447EA35172754041, 0x109D7B742D8C3DAC) },
    // psi(G) * 95
    PointDuif { ypx: GF254::w64le(0xE3CCAB45D2A4F6F7, 0x59040BB73F3BBD2A,
                                 0x730B39D65645BAB5, 0x5C61AED2F83382AA),
                ymx: GF254::w64le(0xA992143DE3CF83E1, 0x13455CB889B700F9,
                                 0x54648228B310E2F7, 0x5B837752EE0F733A),
                t2d: GF254::w64le(0x3923A6C0E5EA0DD9, 0x5EBEBD01FC9CA9A2,
                                 0xA34C205B8FD94258, 0x7D1A10029A0B6CD5) },
    // psi(G) * 97
    PointDuif { ypx: GF254::w64le(0x6C83C02241A46527, 0x4127C85D6BE1FC62,
                                 0x26F86FF5CA7240B6, 0x2167391E7DD95CD9),
                ymx: GF254::w64le(0x79227506AC78CAEF, 0x1A2CF919B8832A0F,
                                 0x07745266405CF574, 0x38095A07F5713AE1),
                t2d: GF254::w64le(0xE5EEAB985CA3E7E7, 0x6A5DD9EEB734D639,
                                 0x991027EBE44A4822, 0x311085FB4DE9C1F0) },
    // psi(G) * 99
    PointDuif { ypx: GF254::w64le(0x33F361E21066C3B5, 0x550091D2DFC8688F,
                                 0x376345C5532BAC13, 0x0AA0898F990931B5),
                ymx: GF254::w64le(0xEA2F3346E5D3226E, 0x208790AB78776AFC,
                                 0xAC7C2AE63433850C, 0x3C5C373ADA10EF52),
                t2d: GF254::w64le(0x96C1B4003F4CDE6A, 0x4546A9C475C09781,
                                 0x6C961FD3E8536294, 0x43F36E63FC0D5066) },
    // psi(G) * 101
    PointDuif { ypx: GF254::w64le(0x296601D8C42167F4, 0x241C1FC38565471B,
                                 0xDB00A27E11CE9617, 0x60381181B7E7E4EE),
                ymx: GF254::w64le(0xC1076B7635AC4D52, 0x0166010FFB8DDA38,
                                 0x5238F69BECC43E0B, 0x63303A2015708B17),
                t2d: GF254::w64le(0xE8BADB2E5BB22591, 0x3A10A4E218B6131D,
                                 0x236AB01AABF1A7B3, 0x1CE8A51A68A4126F) },
    // psi(G) * 103
    PointDuif { ypx: GF254::w64le(0x59E775E2A2A87928, 0x770B48EB4B738301,
                                 0x0B43C2BE176BF79B, 0x1957850FB6424660),
                ymx: GF254::w64le(0x44455EE1ECB0AB2A, 0x620CEAA116EEF4F0,
                                 0x0198F62CB6183F6B, 0x3274F78EAF2D55DB),
                t2d: GF254::w64le(0xD2BA4E460CF7ED5F, 0x19CFC17BC0B66F43,
                                 0xCBAE6F45B1942722, 0x5D93E44739147B58) },
    // psi(G) * 105
    PointDuif { ypx: GF254::w64le(0xD07180B9D28FC597, 0x35372B21B2EA5A46,
                                 0xED2673477F083464, 0x7A9EBEEECC57E6C2),
                ymx: GF254::w64le(0xB51D991A81A6B314, 0x35E7D90F4ED6DE58,
                                 0x45F21E209510DD05, 0x446FFD2715C8D380),
                t2d: GF254::w64le(0xE69B5C7A9B6D3E76, 0x1379E79FB96912E6,
                                 0xC161C848BD508738, 0x22264A049D8CFFF6) },
    // psi(G) * 107
    PointDuif { ypx: GF254::w64le(0x32321A68FF7EF7B3, 0x57B0E50CC585B333,
                                 0x1C08C65BA9D764E7, 0x5534C793F92F00F5),
                ymx: GF254::w64le(0x7A1CED97EAFE6FE4, 0x6B8933739202599C,
                                 0x618C5F8FCADD3FF2, 0x2A8719B3E6548653),
                t2d: GF254::w64le(0x346A9EC5C4200F0C, 0x7A36B8D00D0EDA58,
                                 0x844B22B75021ACCD, 0x769737059FC5E465) },
    // psi(G) * 109
    PointDuif { ypx: GF254::w64le(0xDB1BA69B5019F266, 0x1777242305DB9AC1,
                                 0x491D11AD264B6FF3, 0x136198DFC57A3053),
                ymx: GF254::w64le(0x4A6CC64741EB7176, 0x14E811C97FC97650,
                                 0x6B64667F71BE386D, 0x3286FCADF019EB5E),
                t2d: GF254::w64le(0x3F2591F4498E10A0, 0x674FA7C32DF7867B,
                                 0xBAE8EC7EE100DCF2, 0x03B2C0A20A6372A4) },
    // psi(G) * 111
    PointDuif { ypx: GF254::w64le(0x4C8D76B471E24474, 0x421FB6A7B8A3216B,
                                 0xC672BDB2FE8F514D, 0x202AF653D9AFF3F5),
                ymx: GF254::w64le(0x05E5F80F9626953E, 0x7B721FA3CCD42FFC,
                                 0x99D8E481C0F70479, 0x054C31746D23362B),
                t2d: GF254::w64le(0xFBEF2E20430E8025, 0x60E1E3F02E7720C2,
                                 0x161701874EB347E3, 0x363924E90CBB77A6) },
    // psi(G) * 113
    PointDuif { ypx: GF254::w64le(0x180F5EE1863A1A6A, 0x2F79C0046FF79FE2,
                                 0x44679866E35447F0, 0x1C64C6DD73E0D636),
                ymx: GF254::w64le(0x1D8175566341469D, 0x5BA634965B8B9E87,
                                 0x8F48744F976952A5, 0x744F28D23DB94C8A),
                t2d: GF254::w64le(0xD15E84B1F232DA34, 0x556F3D7AA38BEE8C,
                                 0x14693C56E866EF89, 0x1564FB9A0F81EB03) },
    // psi(G) * 115
    PointDuif { ypx: GF254::w64le(0xE97EED56FA2B483F, 0x6D3F7E01AEBD1957,
                                 0xAE8F128ACA3B3E45, 0x3D41E85BA2AFD3A9),
                ymx: GF254::w64le(0xE4FE485E4B6D8328, 0x65C49B4C3E98098E,
                                 0xE96A00E054D6E91A, 0x394A2122738CD006),
                t2d: GF254::w64le(0x715CCA3DFFD90785, 0x7BC3DCDE15890965,
                                 0x6DCDC47A33A148AC, 0x435DB9D6DBE1BD55) },
    // psi(G) * 117
    PointDuif { ypx: GF254::w64le(0xD74D4D6E0FD89C27, 0x25E727F6A5380553,
                                 0xBE54127BA6C5189A, 0x65C87D3C3E61939C),
                ymx: GF254::w64le(0xC34A6D122A809E2E, 0x7DE6B787F097EAFA,
                                 0xB8F8B6E701758661, 0x10705FBF97042046),
                t2d: GF254::w64le(0x1591614E6DA2D44F, 0x7C74F26EC6EB070F,
                                 0x9AD98C1A50249C60, 0x6E1BBD44D64B2302) },
    // psi(G) * 119
    PointDuif { ypx: GF254::w64le(0x937CEE76047790F9, 0x5B4CCBC70BEAF690,
                                 0x332E79AE75AE0DAE, 0x2E6394161D093556),
                ymx: GF254::w64le(0x4B378BF68F6849F0, 0x6C419FA0CEBBA72D,
                                 0x8BB431E1E273F2A4, 0x357CEC80BBE024FD),
                t2d: GF254::w64le(0x83A6E913962F11A9, 0x7808DF02E2523718,
                                 0xB6690B5DABC49E13, 0x6CEF23259375972A) },
    // psi(G) * 121
    PointDuif { ypx: GF254::w64le(0xD18AC767B5E551FC, 0x5A0BA1DDDB15BD36,
                                 0x6F7923DE219E3E1F, 0x3EC23588DB9B5CFE),
                ymx: GF254::w64le(0xA4FC23D42C83BBE0, 0x21581A00768658CD,
                                 0xA295B6E57110218E, 0x3E7BBAB1D15F477F),
                t2d: GF254::w64le(0x2266C03D3F0D0635, 0x4174F08A95BE03B5,
                                 0xAA1A674ABB8CBEB8, 0x6BDF6BA553AE3390) },
    // psi(G) * 123
    PointDuif { ypx: GF254::w64le(0x8A31F824638545E2, 0x2A9E37A0F0EEDE53,
                                 0x148A53D8CBA69F65, 0x64C587E816D96316),
                ymx: GF254::w64le(0x777A028A47E97E93, 0x13728E46BEFB2E0E,
                                 0x13138B44862FA665, 0x0FCA8C38A87775F6),
                t2d: GF254::w64le(0xCC44BD580DD067FA, 0x40F2F7642E22D02E,
                                 0xAB3BA6DB80C2F728, 0x5068AA2E2D25B7F9) },
    // psi(G) * 125
    PointDuif { ypx: GF254::w64le(0x5A8A842C0A2923FF, 0x67C39E8A1006C196,
                                 0x8F5CB9FF55460A84, 0x2E735C20A419A518),
                ymx: GF254::w64le(0x0C6EE3FCBFDC2DA4, 0x5BF6ED60A87B92BD,
                                 0x5E4CE130E8E1608F, 0x0932CEB3E50028E8),
                t2d: GF254::w64le(0x793CF8A0538CBFB8, 0x4E89E2C018BEB7BD,
                                 0xCAAA79642F5060DE, 0x542A38A4D13F0016) },
    // psi(G) * 127
    PointDuif { ypx: GF254::w64le(0xA1B0FD9AAC663E55, 0x5158BF1F7B33C0E4,
                                 0x060E82F65A4119FE, 0x32347069A1529FC4),
                ymx: GF254::w64le(0x5C96EF69127480D5, 0x409A902134DF6FFE,
                                 0xDBE8C392EB6C7013, 0x73F2C48B0E3B4A79),
                t2d: GF254::w64le(0xDDF5060B937E2DFF, 0x1534F901278611D9,
                                 0xF47FE29AE4FD49A7, 0x7A2C0BFE75539F29) },
    // psi(phi(G)) * 1
    PointDuif { ypx: GF254::w64le(0x19E04D1B2B0FE7FB, 0x56381EBD8181B50E,
                                 0x5C8970C249DF4AC3, 0x08ACAECE8EDE7685),
                ymx: GF254::w64le(0xC44F1A71ACA0D20B, 0x623EDC8D92E4AC3A,
                                 0x5496A7E5885A0C95, 0x20A9BA37315B116E),
                t2d: GF254::w64le(0x3765873809F5B55D, 0x23C44C42EBEF2FF5,
                                 0x56A96D921F724573, 0x3217815B72B8A9EB) },
    // psi(phi(G)) * 3
    PointDuif { ypx: GF254::w64le(0x2CC1B42F5350A489, 0x31F0B36E85B8C70B,
                                 0x504A5C8C4D2CE34D, 0x1AF8EA26B3786EAC),
                ymx: GF254::w64le(0x69BC5E26D7AFD62F, 0x21E399D04247BF9A,
                                 0x6E6D6676A88EFB27, 0x476212B9FE9A6FD4),
                t2d: GF254::w64le(0x0740FB65284168DE, 0x5F7570BE65E69408,
                                 0x0166C3279DD81C29, 0x6565489007C4ED6D) },
    // psi(phi(G)) * 5
    PointDuif { ypx: GF254::w64le(0xBAFB5BD37B5219C9, 0x00251709F2E210F7,
                                 0x0D22639B51C1198B, 0x0F3C0DF3BE3DE811),
                ymx: GF254::w64le(0x3552612BE3374EEF, 0x0834744318FFA0AA,
                                 0xCB9F1C1E3557A00C, 0x20C359F5DE8B6614),
                t2d: GF254::w64le(0xD319482A34D05268, 0x42165771B46B75D7,
                                 0xCA336C22E8D911A6, 0x4D072F70067A47E1) },
    // psi(phi(G)) * 7
    PointDuif { ypx: GF254::w64le(0x9022C6F101555E9E, 0x4C8C7EAF7CC2D697,
                                 0x629810B2D8044817, 0x25110BC01B06C9C1),
                ymx: GF254::w64le(0x1BF9C06BF39EAFF7, 0x6CC36F151F52B4E8,
                                 0x76B73A6A14B62068, 0x47DCB0DC89DB3821),
                t2d: GF254::w64le(0xFE9DFEAC2F670F41, 0x625B5C93B973C417,
                                 0x5F8C917930133C1A, 0x6BD35F3E0992BB2B) },
    // psi(phi(G)) * 9
    PointDuif { ypx: GF254::w64le(0x03B5391A85409E5E, 0x7981D8FD16362767,
                                 0xDB45C80A32A23CB6, 0x67356A7EF48B2DC3),
                ymx: GF254::w64le(0x6189236E9F01ADAF, 0x07A1E954E5032BD6,
                                 0x53D627199C69727E, 0x25D67E4163CEC014),
                t2d: GF254::w64le(0x18E7BB6A63A80738, 0x3112BE4CB5DCBC74,
                                 0xAD9AD6D381643F04, 0x116112CBEABB734D) },
    // psi(phi(G)) * 11
    PointDuif { ypx: GF254::w64le(0x32623ABE2D66FF07, 0x4D780300822436DE,
                                 0x9BED066C04497808, 0x40DB29B39CE86700),
                ymx: GF254::w64le(0x6E5E5EB3805602A5, 0x52F227F2B1B9B40D,
                                 0x51C2C4C197A18394, 0x6D8BCA423EE270BC),
                t2d: GF254::w64le(0xD6E60CFE8FB07F72, 0x7DD66C3970F940C6,
                                 0x66AEA7B59A0B17CC, 0x75FCF8B00160D729) },
    // psi(phi(G)) * 13
    PointDuif { ypx: GF254::w64le(0xBEDC5EA39B2402B5, 0x0DC3600425FEEDD5,
                                 0xADC1DDF2CB1B6631, 0x205EE93E3AAE976A),
                ymx: GF254::w64le(0x7A2CB4E333C98498, 0x7D12EB776D56872C,
                                 0x8E339BC1B41599FE, 0x4600F0A53FAC9427),
                t2d: GF254::w64le(0x1049D3A372F14304, 0x7B54E020B22DB742,
                                 0xD567962272A35739, 0x27A1178B1115F0C4) },
    // psi(phi(G)) * 15
    PointDuif { ypx: GF254::w64le(0x6CFB39D619C35E1B, 0x5CB96FD1A9D9D486,
                                 0xAF45CEF7FB4FFFEA, 0x4A73D7B2BA9321D1),
                ymx: GF254::w64le(0x44B46B4A80BE86AC, 0x2769B50579E8F734,
                                 0xAB5D109E7472F372, 0x2BCCFBA1CBE995B6),
                t2d: GF254::w64le(0xC00026115332F6A3, 0x7ACB287DA1561C53,
                                 0x21555C608CD90DD9, 0x7731D1B2878DAE13) },
    // psi(phi(G)) * 17
    PointDuif { ypx: GF254::w64le(0x32122BF5EC1A0649, 0x592B5FA180EC8467,
                                 0x876BE1B5AD9CE66F, 0x484C1CC5BB34819D),
                ymx: GF254::w64le(0x08E4CC425B30B06C, 0x2766065F0E4D22CE,
                                 0xD90825644987AEFF, 0x3A835FCC7FC456A6),
                t2d: GF254::w64le(0xF4D801D2CC806D69, 0x41D767ECCA55F839,
                                 0xF2DEA9FD01F1E74F, 0x74D01B97462211CB) },
    // psi(phi(G)) * 19
    PointDuif { ypx: GF254::w64le(0xE43E280AD29F80CC, 0x5CDF66A69029B231,
                                 0xE8D655A03C862CD9, 0x388E38B58D0E8C79),
                ymx: GF254::w64le(0x5D9AAA4848FF83A2, 0x14D6FBEE4D6CBE74,
                                 0x0426DCDA912109EA, 0x1BB7B9CD75D4B541),
                t2d: GF254::w64le(0x3A3C0504B39B8505, 0x35A3C5882B31367A,
                                 0x678793D635A6473A, 0x66ABCA7E20202034) },
    // psi(phi(G)) * 21
    PointDuif { ypx: GF254::w64le(0x4A90FF1DAD300021, 0x18F29036544D2684,
                                 0x2036D39B8F69095D, 0x36490F5645D18CC8),
                ymx: GF254::w64le(0x9414D7368AD3562E, 0x7F8108A04558487E,
                                 0x93DB0E56D653E40B, 0x03F413EA960537BB),
                t2d: GF254::w64le(0x984717B77F7267EF, 0x6C5D9DA4A5EE7305,
                                 0x725318DC36060A49, 0x274397F8E79A239E) },
    // psi(phi(G)) * 23
    PointDuif { ypx: GF254::w64le(0xBDA7965B4095BAB0, 0x6292B2505C7866E3,
                                 0x451FB6A0672D6733, 0x37C560F40242A859),
                ymx: GF254::w64le(0x151E56EB818F1423, 0x63451986F0C22EE1,
                                 0x9275FF873A5C75E1, 0x178CDC734A32B96A),
                t2d: GF254::w64le(0xFF7ADBB24244AACC, 0x76518AA0DFD96DDC,
                                 0x161C1C8C81071219, 0x0584D44C10A3E6DC) },
    // psi(phi(G)) * 25
    PointDuif { ypx: GF254::w64le(0x2727282A09E9ACAB, 0x1298E49C34514EBD,
                                 0x0323D059CA1C0E6D, 0x6072C8B87DD26BC6),
                ymx: GF254::w64le(0x36ECA2AB28D36F26, 0x2A977CB5AAE4EA2A,
                                 0xF157D43A0B9546A7, 0x04D60AF0ED661D29),
                t2d: GF254::w64le(0x34BC1080126E4402, 0x7677EF9A21589171,
                                 0xBD13797278F07A40, 0x32C0DAF0B57F20AC) },
    // psi(phi(G)) * 27
    PointDuif { ypx: GF254::w64le(0xBC83FD1B8366DC2E, 0x6CD07286C4E670EC,
                                 0xF35485A3F339DC8A, 0x6E7E9285F2247E8B),
                ymx: GF254::w64le(0xA9D19D3A09943BAE, 0x43FA5197EED852A6,
                                 0xF911398A043242FE, 0x4A100DCB1312CBE9),
                t2d: GF254::w64le(0xBE2FD86BE910A692, 0x614FD829368D7937,
                                 0xDB5A98B1A92D578F, 0x46F1D23E1B0DCA7E) },
    // psi(phi(G)) * 29
    PointDuif { ypx: GF254::w64le(0x8BF4C6725E813F36, 0x68BC89078129CE91,
                                 0xFF56503AE28F5C7F, 0x2B6E0F4E42178CE5),
                ymx: GF254::w64le(0xA97CD947EC65895B, 0x7AA90B66280FF6C9,
                                 0xEBBAF32DF158A0A0, 0x6A748D0AC02BB713),
                t2d: GF254::w64le(0xDF79B5D619E83397, 0x16934947F6485B69,
                                 0xE75185521AB32881, 0x20791E276A7460C9) },
    // psi(phi(G)) * 31
    PointDuif { ypx: GF254::w64le(0xD25C403E22C70BC9, 0x0BF079518E66E1D3,
                                 0x45DD5C971D3711DE, 0x66BD2C6A30BE232C),
                ymx: GF254::w64le(0x607829E5B29E53CA, 0x30ED414E71DC08A2,
                                 0x3FD38589EA0F1D39, 0x5A881A121F37FC5C),
                t2d: GF254::w64le(0x27B9394368987A4F, 0x321FE45E13AFAE2D,
                                 0xC6FEB75080F33EA0, 0x02166D52F45EEBBD) },
    // psi(phi(G)) * 33
    PointDuif { ypx: GF254::w64le(0x15026A1B0CCD2FC9, 0x1141BE93D5BC3D6D,
                                 0xFD20DF606FC676C9, 0x4059E26B00AD78C4),
                ymx: GF254::w64le(0x0709B409CEC6B505, 0x68F020E8ACF478E5,
                                 0x875D77D1F5DF0CFC, 0x66EB377735162FF1),
                t2d: GF254::w64le(0x860482AB417A32AE, 0x21175F47DA213935,
                                 0xA07FF0CDA099ECDB, 0x26AE5F177AE2B8E7) },
    // psi(phi(G)) * 35
    PointDuif { ypx: GF254::w64le(0xA9A070EA5120EAF7, 0x2581FEEBA7383F81,
                                 0x49E0F137F1FA2A7A, 0x7FE93C51CFD1EC62),
                ymx: GF254::w64le(0x2D74DBDCA7777F7E, 0x562DA2BA74E823FF,
                                 0x543B4F8609D77A2E, 0x3A0F65212F234EC8),
                t2d: GF254::w64le(0xF842E3FEA270EBC6, 0x4524322C6A289E11,
                                 0x80815887AA6A8576, 0x46F49D53C3FE29A3) },
    // psi(phi(G)) * 37
    PointDuif { ypx: GF254::w64le(0xBCC93CEDFDB0D388, 0x4DB312076EF0AD2B,
                                 0x1F2CD56373654AD9, 0x4C6446970034D15F),
                ymx: GF254::w64le(0x34D2CDBFD5D7130C, 0x6198950D03DB2AE5,
                                 0x736094B72FAF1B1A, 0x1F6CA46A9F2588F7),
                t2d: GF254::w64le(0xCBA0B03D6259772A, 0x24E5A23D8D6BE3A8,
                                 0x7090E340C94F6D6F, 0x287BA27EE54E8466) },
    // psi(phi(G)) * 39
    PointDuif { ypx: GF254::w64le(0x87320C8822D607F0, 0x44FD5802509DF171,
                                 0xF35C09860BF6BA4A, 0x6CF53130EF77CC0A),
                ymx: GF254::w64le(0xAA81167A00B48CE4, 0x649F4C775B0D8B48,
                                 0x59A25683EE98D33D, 0x651479007D1061A6),
                t2d: GF254::w64le(0x155487411F6E16DA, 0x411D036475404BF2,
                                 0xC231F1344162458A, 0x4F36B7633F7DD368) },
    // psi(phi(G)) * 41
    PointDuif { ypx: GF254::w64le(0xA98DDC0A4E7A89A4, 0x55D8A5DA6EACD542,
                                 0x5C3FB48B1001ED45, 0x5C7785CCAFA702B9),
                ymx: GF254::w64le(0xA64369FD216AFB79, 0x1F405EF10E940669,
                                 0x755F4831BC327B6F, 0x2BC1B67D71F1882D),
                t2d: GF254::w64le(0x8EAB15CFED7777D0, 0x517370D580D99326,
                                 0x0811B75701C9DB39, 0x234D84CB52F7B621) },
    // psi(phi(G)) * 43
    PointDuif { ypx: GF254::w64le(0x970C4FBDDDDAE49C, 0x3BA8D842475E41E1,
                                 0xB0720F6AD75E7008, 0x275CD5C5184BF345),
                ymx: GF254::w64le(0x5EB9833888D3796A, 0x1B3A42DFDE11C2F3,
                                 0x946548FE092B5F4D, 0x119917B50F263CC9),
                t2d: GF254::w64le(0x622DE955A20A3F82, 0x6A552EA3A60C7FF4,
                                 0xC79230138150372A, 0x18083B9518DE76A7) },
    // psi(phi(G)) * 45
    PointDuif { ypx: GF254::w64le(0x55FB74DD7D3B5455, 0x523EEA9A70FF8334,
                                 0x5994A7335E356271, 0x3BB011F60430F1D2),
                ymx: GF254::w64le(0x1EC434CBA1D6EA7C, 0x69B632960FEB5780,
                                 0x46C50417541EBF07, 0x01470BFBF9D23830),
                t2d: GF254::w64le(0xE9551F4C049BC5CC, 0x1C124638F35EE8ED,
                                 0x09CA3A9141E83A38, 0x44DAAF3E7411127B) },
    // psi(phi(G)) * 47
    PointDuif { ypx: GF254::w64le(0x0E54717B6C2FCD10, 0x518AB46B26D5914B,
                                 0x528AC6C82341E833, 0x2247FA99D41F4672),
                ymx: GF254::w64le(0xABE30C65C0F327A2, 0x3AC74E012B77E1B4,
                                 0x35DEFD694C0E86B3, 0x7C382E10BFE60E4E),
                t2d: GF254::w64le(0xF37E382996B8461C, 0x4D47481C53631E1A,
                                 0xAC8F167884F7B7B1, 0x5AE1BB6AB1A4C643) },
    // psi(phi(G)) * 49
    PointDuif { ypx: GF254::w64le(0x63EB02590829DF80, 0x623126862A793FA1,
                                 0x6E1E242F1CE09807, 0x7BF96130AAECFD2B),
                ymx: GF254::w64le(0xEDC5E9EA10BFF70A, 0x66B548233B94D26E,
                                 0x70C70EE4594D30AB, 0x79B0006C8811353E),
                t2d: GF254::w64le(0x4352792C91710C1F, 0x0C7BF15181A9F539,
                                 0xFC995EE769E3779C, 0x44871C6CB9DCEDCD) },
    // psi(phi(G)) * 51
    PointDuif { ypx: GF254::w64le(0x0D180BBF2C9A046B, 0x5445C598C45D0CD9,
                                 0xDEFB32386875FB94, 0x5B0D235355660F35),
                ymx: GF254::w64le(0xBE1DEA825B3A7973, 0x10658EC4E1BBE147,
                                 0x48AF5E87FAD77504, 0x55F5D3C94A7DD694),
                t2d: GF254::w64le(0xA9A3E7062CAD6BA2, 0x36C0A7E3F9E0EA31,
                                 0xC4BD65217010AEBC, 0x1D031DFC8B9FB598) },
    // psi(phi(G)) * 53
    PointDuif { ypx: GF254::w64le(0xE3621C104113889E, 0x774B77EE1E6A6477,
                                 0x124C5B8A07785FD7, 0x5A6C0DF18188CADA),
                ymx: GF254::w64le(0xF4ADCD545E72D7BE, 0x38100FFFB66BA966,
                                 0x2100CBE35FE4A4D0, 0x4489BE2DF052C175),
                t2d: GF254::w64le(0xA03A22403B26899F, 0x5AE4A0A0FEC13928,
                                 0x89DFBFB802795EAA, 0x34917E9C4ECF2532) },
    // psi(phi(G)) * 55
    PointDuif { ypx: GF254::w64le(0x64B93674C60CBBB3, 0x25C098506334C71D,
                                 0x8A723F66F1EE34E1, 0x3A960ADF48F141E4),
                ymx: GF254::w64le(0x659F386695E440BB, 0x577A0FBF6E8095E6,
                                 0x8EF419B0F4B25496, 0x044176A30B9E465B),
                t2d: GF254::w64le(0x7A98705DF2013E6F, 0x77D0B2483AA95CE7,
                                 0x309E917B978EFFD7, 0x08F1E55BFE942C7F) },
    // psi(phi(G)) * 57
    PointDuif { ypx: GF254::w64le(0xFC241629B8D613C8, 0x140F2E35CD68949F,
                                 0x38899F6A3EE4F9FA, 0x7ABC8ECDD300F3B5),
                ymx: GF254::w64le(0xD3DAD23505D23EAF, 0x75E73F09376B2C7C,
                                 0x5644A663B60EC5C4, 0x511ADE8AFE1EAEC9),
                t2d: GF254::w64le(0xBB005FE4E1ABCA89, 0x2838DE73B0CA1F6C,
                                 0x800A6658B80D28C8, 0x48AABA61C91641EC) },
    // psi(phi(G)) * 59
    PointDuif { ypx: GF254::w64le(0x222759CAB704D4E2, 0x106DD3C0CE85BECA,
                                 0xA1CE1CE341F69D03, 0x1651B210E8E4EE10),
                ymx: GF254::w64le(0x47329A5E7133E136, 0x58C02F47DC9367B9,
                                 0x09DCBA56947B02AF, 0x435C251178125B48),
                t2d: GF254::w64le(0xD56979A3F0CD9315, 0x2F02B0A6422AFDDB,
                                 0x23920F500731F32D, 0x0AB833238232CB5D) },
    // psi(phi(G)) * 61
    PointDuif { ypx: GF254::w64le(0xA7B3D1BFB0BB60DB, 0x2342C2A03C6EAEC2,
                                 0xAC5E6E5A14D5282E, 0x5B9A421DDC42A24B),
                ymx: GF254::w64le(0x018506414543E056, 0x6D7C377C084954E6,
                                 0x4F8BF71ED3DB1CED, 0x5150DBC15AB10979),
                t2d: GF254::w64le(0x00B50A1B373A7FBF, 0x140BE5C3D3244705,
                                 0x5005BFE96E5B7911, 0x77CEA555BB133F3E) },
    // psi(phi(G)) * 63
    PointDuif { ypx: GF254::w64le(0x2AB1E1A9D7A973C6, 0x3897AC98314968D3,
                                 0x9E0F74764B23C9C3, 0x2E5ECBBAE41997CD),
                ymx: GF254::w64le(0x43E2EA5648F12433, 0x3A515A0E4808E69C,
                                 0x17D36C03C36BB343, 0x44CEBD053481CE43),
                t2d: GF254::w64le(0x89008656C21B0D76, 0x2F8513FCB9009BE6,
                                 0x2E223F90208A0E83, 0x3828C2D4EFD36A73) },
    // psi(phi(G)) * 65
    PointDuif { ypx: GF254::w64le(0xBF17D64F89A8527D, 0x59EBB42B9656151D,
                                 0x7D7BC7245C7DC5EF, 0x191B682A0CB695EC),
                ymx: GF254::w64le(0x8931172FAD9F9ADD, 0x239B6CBBAB2EBDCF,
                                 0x76932F9CA7002DD1, 0x0C140548F858D8B5),
                t2d: GF254::w64le(0x6C7ADFDDCF741EA5, 0x3B39C4B9E2E1A567,
                                 0xC5135A25F87436FE, 0x690D8FECB7DD0AE0) },
    // psi(phi(G)) * 67
    PointDuif { ypx: GF254::w64le(0xD782A618ECDA10C2, 0x4F2A84B3134CF832,
                                 0x35A81F71BBC955A4, 0x457F88ED64AE6398),
                ymx: GF254::w64le(0xC27EB71C31479985, 0x4AE91808569AAB32,
                                 0xA5F2E9785A75EB11, 0x619CB199B837ED36),
                t2d: GF254::w64le(0x0E7E5912B9484E40, 0x3B5831E87FDBCAF0,
                                 0x49A2779C2D2B039D, 0x3D4B81E07F49061A) },
    // psi(phi(G)) * 69
    PointDuif { ypx: GF254::w64le(0xAA119B0FA222B55C, 0x265C1B11B42FD4E2,
                                 0x6B4D28E519DD7637, 0x3D2DA7900DE5A4B2),
                ymx: GF254::w64le(0x99B06586B5F21D63, 0x4CE62BD9E6A1EE18,
                                 0xB671E753932F8C92, 0x390B7821D0987834),
                t2d: GF254::w64le(0x1ADF7C73C3F1FC2F, 0x78C636A8514A7AF9,
                                 0xAEE3B35FE11E7533, 0x7FBD199278F6FFD7) },
    // psi(phi(G)) * 71
    PointDuif { ypx: GF254::w64le(0x41AABBF4363D77DE, 0x1B27FDF18B96BF6A,
                                 0xDA264A1DFF9A981C, 0x36EFC08530C0BF9A),
                ymx: GF254::w64le(0x5BD8862A5D830854, 0x23D7C905E656E6CB,
                                 0x4523324C5B64FDCF, 0x36627F376238665F),
                t2d: GF254::w64le(0x564F53925C6D5EA4, 0x17C7CC86A1913022,
                                 0xF90DB52A543B009B, 0x15192DC91F8B994B) },
    // psi(phi(G)) * 73
    PointDuif { ypx: GF254::w64le(0x80BFA3C1A79EC6E2, 0x48FCA8EA99772ECC,
                                 0xFEE6A3B98C0F1824, 0x46A8C75601B81E22),
                ymx: GF254::w64le(0x2CB3C402A8895FCC, 0x1D1DFF9C04305CE2,
                                 0xC1AEFE78E85971D7, 0x79C6A083AB5A80B2),
                t2d: GF254::w64le(0x379C7BCA5DBF2518, 0x2419358989B3CA02,
                                 0xC9C42C9CFA5F470E, 0x4481C2CE91B14459) },
    // psi(phi(G)) * 75
    PointDuif { ypx: GF254::w64le(0x6B04DEA1EA26DECA, 0x26EE3CEEE0D0A101,
                                 0xE36CC6BCD8FA4F26, 0x4D14709719764FBD),
                ymx: GF254::w64le(0xE0572A706F1FEF52, 0x0F75FB69A23F2EC1,
                                 0x32AE4B04A864CF3B, 0x0B6373A91B944773),
                t2d: GF254::w64le(0x1A8F2BC20BD088AF, 0x586B0D5ACE401747,
                                 0xA0E6B094A3C51433, 0x1752A123C268C1C7) },
    // psi(phi(G)) * 77
    PointDuif { ypx: GF254::w64le(0x643C2A93B5770EA1, 0x536CB9D1B71EEB43,
                                 0x6BFB0525D0CC6B3F, 0x1F4DCFEEC3ADEFC3),
                ymx: GF254::w64le(0x28A0169DD0BF57F0, 0x1336C9AA20A35449,
                                 0xBBCDA068703AD7A1, 0x5E33478283C1E03D),
                t2d: GF254::w64le(0xF1997733D18FDAF2, 0x789AF507A17BB867,
                                 0x79970C14D5695613, 0x79452342E845256F) },
    // psi(phi(G)) * 79
    PointDuif { ypx: GF254::w64le(0x6C12F9367A26A018, 0x11BEDA1C8F9CDFBE,
                                 0x720E6DDF24B30929, 0x7706E91E3E544755),
                ymx: GF254::w64le(0x4460381D3A6C9059, 0x7E01916C3678C424,
                                 0x6024355A61D2BB07, 0x68BAE01D79C869E2),
                t2d: GF254::w64le(0xF21CBCFF285DF659, 0x02F7EE6AEB57C933,
                                 0xCE0F078C17266467, 0x039B4FDB5170A103) },
    // psi(phi(G)) * 81
    PointDuif { ypx: GF254::w64le(0xD5DE0FEC61A4AE1B, 0x33D37A152A778695,
                                 0xEA64E40E6A10DED9, 0x1F1D394373BDB213),
                ymx: GF254::w64le(0xF63598B6EF59FD14, 0x57922ADC3AE52283,
                                 0xE39A90E18B76F4A1, 0x27F3DBEBD98A9DAE),
                t2d: GF254::w64le(0x18179DD9C03804B3, 0x511D72C1912E2D73,
                                 0x88E1F6D24B2F3225, 0x56009999CDC2997F) },
    // psi(phi(G)) * 83
    PointDuif { ypx: GF254::w64le(0xDA6DF977B7D82FE4, 0x76F746BBA63DA226,
                                 0x0B5FACFC3BF13BD7, 0x4A31EB04F66F0E18),
                ymx: GF254::w64le(0x8ACE73D5E7CFE28F, 0x19AA731BC30C20B1,
                                 0xA91979FE73400317, 0x6795CE71A09C7C9F),
                t2d: GF254::w64le(0x93D55501933700BA, 0x3850EAF08B1FD14D,
                                 0x450C5ABC89EDCA71, 0x1BE5DB848BDFA5EF) },
    // psi(phi(G)) * 85
    PointDuif { ypx: GF254::w64le(0x77667D3F4FCF082B, 0x673B6E6C4824BC45,
                                 0x6F22C12A5FE0ED6D, 0x006EE6722B5DFED1),
                ymx: GF254::w64le(0xB47A13C1468D0C62, 0x40564879A378E6E4,
                                 0x0BC6B553A9D3AB58, 0x21761C79E44DFCFD),
                t2d: GF254::w64le(0x66F36ED3EB1050FB, 0x2E67DF1312DD01D3,
                                 0x48744C4A68DBF2AD, 0x7844962B6D6E039C) },
    // psi(phi(G)) * 87
    PointDuif { ypx: GF254::w64le(0xE07B5675D378B65F, 0x336262AA3D2C1DF0,
                                 0x320A5667D78C2E2B, 0x4F668DD96DDA5E2A),
                ymx: GF254::w64le(0xE21556795C7B8470, 0x3061905B2EF82BB1,
                                 0xAEE53211472206B6, 0x1F87377FEE0D7A39),
                t2d: GF254::w64le(0xDAC58C52A3B1A0C7, 0x6E3C4CE04F0D7FFD,
                                 0xFDFFEC45D4A3990F, 0x4B5340F79E2AE2C2) },
    // psi(phi(G)) * 89
    PointDuif { ypx: GF254::w64le(0x0537C8B7B3D1F332, 0x55292744AE35EE1A,
                                 0x42336D0E6D057F1E, 0x5AC40E9E645CB3D7),
                ymx: GF254::w64le(0x848F7B7F845E46C7, 0x74BDA86736EFF150,
                                 0x891ACF622BAF4F35, 0x14BCEF9CF39667BB),
                t2d: GF254::w64le(0x9AA1354D9731B9B3, 0x27E855A19295E59F,
                                 0x1A829A8E10662ED0, 0x3BBC43F9EC4437A7) },
    // psi(phi(G)) * 91
    PointDuif { ypx: GF254::w64le(0x8BFA8B1CB1DE5341, 0x3432778068D35549,
                                 0xE3D807DA41F25A48, 0x1BB6EE1CE2EFE552),
                ymx: GF254::w64le(0x08D9BDED0BD3AFFC, 0x290F1C5299A917A8,
                                 0xDA8DFD79562F8939, 0x1BF7AAE68686211F),
                t2d: GF254::w64le(0x2AB6DAF9BC860765, 0x7BEF6E2F0EB58A0B,
                                 0x8746FAAB7C439B94, 0x017EA87750BB8BDA) },
    // psi(phi(G)) * 93
    PointDuif { ypx: GF254::w64le(0xF8DFEB22239C9A7C, 0x35CEC0D2887B3A13,
                                 0x68AA94AC601F1606, 0x7470553F8BA61767),
                ymx: GF254::w64le(0x37894F91C9EAC410, 0x55B22AEB8337F732,
                                 0x53F8D90F29A2FE94, 0x0AEC068AEC69023A),
                t2d: GF254::w64le(0x40506162AD6182EE, 0x6A327FF1AC1E5475,
                                 0x968D7095492DF3C8, 0x3F93F46195F67521) },
    // psi(phi(G)) * 95
    PointDuif { ypx: GF254::w64le(0x4983BCA28970D546, 0x2716B931296B53C2,
                                 0xF42B013266B6F8B3, 0x76F29B084B6A369F),
                ymx: GF254::w64le(0x8E28749222216249, 0x4F2FA1D3A6C1ACFD,
                                 0x0EE66697EAB8F954, 0x37C33E28FEC0CCE5),
                t2d: GF254::w64le(0x7D0419E2BAFD1DD1, 0x01F04D4299B94DAA,
                                 0x5EC06ABBC1E5C7E6, 0x3A24C66060ED72A9) },
    // psi(phi(G)) * 97
    PointDuif { ypx: GF254::w64le(0x0DB764E15F960F26, 0x1D5973D5D59F9C3A,
                                 0xF3DC2608DC6D9149, 0x1D80E0461B72F518),
                ymx: GF254::w64le(0x2264DCCD49C8B09C, 0x1F03E7A246334D5E,
                                 0x2D6E38871B1FC2AD, 0x418588AE4F284BD3),
                t2d: GF254::w64le(0x3EFB071BAFE1AFA2, 0x0799BA0C80BDD8DC,
                                 0xA6B273222DCC4A76, 0x13859F08AC8A4B23) },
    // psi(phi(G)) * 99
    PointDuif { ypx: GF254::w64le(0x0194ACC2663C5ACB, 0x459FA55BD0BBEDF6,
                                 0x1B055550F06F8CC1, 0x09E5FAD46599EA75),
                ymx: GF254::w64le(0x6B3916EF772958A3, 0x4AAAA5C18093A431,
                                 0x8E1503E36610F594, 0x620EF55048A263B9),
                t2d: GF254::w64le(0x5A28963C8CB8ECBC, 0x6AEE46B1B740C15A,
                                 0x67E39606F59CFEA9, 0x13A579E3777CA8B1) },
    // psi(phi(G)) * 101
    PointDuif { ypx: GF254::w64le(0x45AD92F61CBB8DE3, 0x53068A1A42460EAB,
                                 0x9B163546DE379578, 0x07BF38A7CECD4860),
                ymx: GF254::w64le(0xF84C77031D282DE1, 0x402AED6399F78FFC,
                                 0xFB83DD20295F6D45, 0x3702E257340D2ECD),
                t2d: GF254::w64le(0xB8DB2D8B979B97C8, 0x617526D2A50B0C51,
                                 0xD86F6278313017DB, 0x2F35EEDEC55F9D92) },
    // psi(phi(G)) * 103
    PointDuif { ypx: GF254::w64le(0xEECB69493517973B, 0x7A111A74E0BAF09A,
                                 0xB82C6DA8EC39F63D, 0x4217076312833746),
                ymx: GF254::w64le(0x5D36D11F3DDA88D9, 0x7BAEBCB360F2A887,
                                 0x9829B62D093D6CBB, 0x10F17A2F6EDF28FD),
                t2d: GF254::w64le(0xFE3EFA4353F40626, 0x731CA3065C118E34,
                                 0x6185678827960895, 0x07F906A4F4C6355C) },
    // psi(phi(G)) * 105
    PointDuif { ypx: GF254::w64le(0x361D9CD10E657142, 0x2B5F5D452DD861CE,
                                 0xA3E01DF05D04B69A, 0x533723BC4CFCC0DB),
                ymx: GF254::w64le(0x820384AFA1BBCCB5, 0x4E67E941595D8DFD,
                                 0x0F8DA50839E13646, 0x6887A0573A596968),
                t2d: GF254::w64le(0xE93DD1DF5ACE7343, 0x0D4076F28ECF96C8,
                                 0x0BA2F854988074C1, 0x5EB2A314A41A40B6) },
    // psi(phi(G)) * 107
    PointDuif { ypx: GF254::w64le(0x49FF6D27A676B27E, 0x15F7CA40ACD5114E,
                                 0xC171F9A750D7DA95, 0x3BEDBE891F79EB5C),
                ymx: GF254::w64le(0x5B643BCEB83F74FF, 0x088B1AF3AA331A4C,
                                 0xDE294C7E0A60C4A9, 0x0A0770FC8120B151),
                t2d: GF254::w64le(0xF09B757A0C7C1937, 0x34B797C03EFD9C88,
                                 0x051E3EDB2C28CC49, 0x66DB34EC5AC5122C) },
    // psi(phi(G)) * 109
    PointDuif { ypx: GF254::w64le(0x95FDE0D3D3DC8CBF, 0x797897C8121818CF,
                                 0x1FD46D197710F89D, 0x533A505803F809C5),
                ymx: GF254::w64le(0xB60F1C090C9FD211, 0x4A7C3479AF5C9D82,
                                 0x4BFC3FFA4C8CF5A5, 0x6949F4A61306821F),
                t2d: GF254::w64le(0xD814C949C67ABCDC, 0x419A5E33166863C4,
                                 0x9DE646F6BD0895E0, 0x497CC1449A54545A) },
    // psi(phi(G)) * 111
    PointDuif { ypx: GF254::w64le(0x69EB31247FE126F2, 0x323C83233967F477,
                                 0x52E0DB4D3D78127D, 0x42A0E188E7B9380C),
                ymx: GF254::w64le(0x3A6B011C46E34E7E, 0x79F4168AA9A0B4AA,
                                 0x94270A25D708FA4D, 0x2BB28618CBC9CDC8),
                t2d: GF254::w64le(0x741E46BB04606819, 0x02790C52FB2CE982,
                                 0x6DBB92D0C6D0AF10, 0x32AA96AE061E9412) },
    // psi(phi(G)) * 113
    PointDuif { ypx: GF254::w64le(0x1376700C90D98EAA, 0x4D1DFE650C0A7136,
                                 0xB397F8EEF89AFF20, 0x4836AC4A041BAE37),
                ymx: GF254::w64le(0xF37C1076A80A02B8, 0x0D063FA2467B3A37,
                                 0x498F2617B56B7E7B, 0x65EF1194DB859A5D),
                t2d: GF254::w64le(0xD1FE25D5D28FFCB6, 0x228EE6F49459C083,
                                 0x6B7E82B3B009B15B, 0x713B185EF1FCCBFC) },
    // psi(phi(G)) * 115
    PointDuif { ypx: GF254::w64le(0x552468F1FF60C298, 0x2B7BA65D02519614,
                                 0x8A86AD90FF0816C2, 0x7BF9249284BD02E5),
                ymx: GF254::w64le(0x3008C56E474C2D10, 0x171473B77F804540,
                                 0x15FB79D07BDEA766, 0x66AC67C7B9B0951F),
                t2d: GF254::w64le(0x34BCA15BB6D2F652, 0x13C63DD2687D617B,
                                 0xC515AE237715C19C, 0x0E543C6765FBFEF2) },
    // psi(phi(G)) * 117
    PointDuif { ypx: GF254::w64le(0x668C80FAF156FB5E, 0x1E2E9E3B3D9962B8,
                                 0x89EBAA264394E113, 0x322ADD21CF1659CF),
                ymx: GF254::w64le(0xF9E6E26733619F8E, 0x723BFC8B792147F0,
                                 0x79AEF2837D7E092F, 0x1AA61C59290B5011),
                t2d: GF254::w64le(0x9955AE576A499CD3, 0x2C3D6E6A5A1CE0DA,
                                 0xB864CFA199A8676B, 0x4961A21F1080285F) },
    // psi(phi(G)) * 119
    PointDuif { ypx: GF254::w64le(0x828E184ADF9D997B, 0x0C84BDA97E7CE725,
                                 0xE6974677094CFCC5, 0x4EC8CD773946105B),
                ymx: GF254::w64le(0xA48681BCC95FB5C6, 0x6ADE87F8F7A5F269,
                                 0x9B97628FDD39C03D, 0x3BDE0EE1F19F1842),
                t2d: GF254::w64le(0x4EF8C8FB117C0CA1, 0x769BF8F8D07DE9BF,
                                 0xC8F5F435B78A57E5, 0x79987AA861BBCF9C) },
    // psi(phi(G)) * 121
    PointDuif { ypx: GF254::w64le(0x7F6C557204B02022, 0x119BD819111C69D1,
                                 0xF0C61EF00B3EB70B, 0x4317F0511BFB7B39),
                ymx: GF254::w64le(0x36A2B944E84D608E, 0x1C1A3862DA3369CB,
                                 0x37DBF471085F1775, 0x3835751E107419AD),
                t2d: GF254::w64le(0x04AB0C84BB07A3FE, 0x63758BFBC7DF13A0,
                                 0x15FFD20CB554F23E, 0x1FF11C442B1515B7) },
    // psi(phi(G)) * 123
    PointDuif { ypx: GF254::w64le(0x171377F1BF937186, 0x615EFE82B83538F8,
                                 0x321E7CFAE352A761, 0x7AF02427D7241502),
                ymx: GF254::w64le(0x86546E47F2CC559F, 0x65A1D8A017659D75,
                                 0xC95D8AA5B8BFDAC9, 0x01E887CB68990623),
                t2d: GF254::w64le(0xF1F8EE8C466BCC3D, 0x40CE5E4F2BA3908F,
                                 0xD2B81A3480C16B35, 0x51625D3EABF708CD) },
    // psi(phi(G)) * 125
    PointDuif { ypx: GF254::w64le(0x44D770A210105739, 0x7F1DE74A022958A0,
                                 0xFBE4C91BD1E8F732, 0x204FBACB13586460),
                ymx: GF254::w64le(0x97D79097D62E3CF8, 0x541AD5591934B114,
                                 0xFDFB47919C141909, 0x354926E5244FDECF),
                t2d: GF254::w64le(0x6291B0A0E2E994B0, 0x2B9A9A69D3A6C3D1,
                                 0x8189BE54302371E7, 0x3645C65DF1A881CD) },
    // psi(phi(G)) * 127
    PointDuif { ypx: GF254::w64le(0xDF0460F445E3877B, 0x7EA384DC52D0D26E,
                                 0x0C2E5F768D46B6B0, 0x1F6E62DAA7C5D4E6),
                ymx: GF254::w64le(0xF8B026B33B2343EE, 0x2B7183C8767D372C,
                                 0xBD45D1B6B6731517, 0x4DDB3D287C470D60),
                t2d: GF254::w64le(0x1031DBA40263ECE2, 0x4E737FA0D659045F,
                                 0x8CBC98D07D09B455, 0x34A35128A2BCB7F5) },
];

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {

    use super::{DOUBLE_SCALAR_TABLE, FIXED_BASE_TABLE};
    use super::super::{Point, D_FIXEDBASE, E_FIXEDBASE, NPOINTS_DOUBLEMUL_WP,
        V_FIXEDBASE, VPOINTS_FIXEDBASE, W_FIXEDBASE};

    fn xdouble(P: Point, n: usize) -> Point {
        let mut Q = P;
        for _ in 0..n {
            Q.set_double();
        }
        Q
    }

    #[test]
    fn fixed_base_entries() {
        // rows[i] = 2^(i*D)*G
        let mut rows = [Point::BASE; W_FIXEDBASE];
        for i in 1..W_FIXEDBASE {
            rows[i] = xdouble(rows[i - 1], D_FIXEDBASE);
        }
        for b in 0..V_FIXEDBASE {
            for u in 0..VPOINTS_FIXEDBASE {
                let mut P = rows[0];
                for i in 0..(W_FIXEDBASE - 1) {
                    if ((u >> i) & 1) != 0 {
                        P += rows[i + 1];
                    }
                }
                let P = xdouble(P, b * E_FIXEDBASE);
                let T = Point(FIXED_BASE_TABLE[b * VPOINTS_FIXEDBASE + u].to_ext());
                assert!(T.equals(P) == 0xFFFFFFFF, "comb {} entry {}", b, u);
            }
        }
    }

    #[test]
    fn double_base_entries() {
        let G = Point::BASE;
        let images = [G, G.phi(), G.psi(), G.phi().psi()];
        for j in 0..4 {
            let P2 = images[j].double();
            let mut P = images[j];
            for i in 0..NPOINTS_DOUBLEMUL_WP {
                let T = Point(DOUBLE_SCALAR_TABLE[j * NPOINTS_DOUBLEMUL_WP + i].to_ext());
                assert!(T.equals(P) == 0xFFFFFFFF, "image {} entry {}", j, i);
                P += P2;
            }
        }
    }
}
